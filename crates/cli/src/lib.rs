pub mod cases;
pub mod commands;
pub mod telemetry;
