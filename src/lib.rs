// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! satq-kernel: a deterministic, no_std saturating fixed-point formula evaluator.
//!
//! The kernel computes `q = sat_N(((a - b) * (1 + 3c) - 4d) >> 1)` where `sat_N`
//! clamps into the signed range of an `N`-bit integer. Intermediates are held in
//! `i128`, so every `i64` input produces an in-range result.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod formula;
pub mod fxp;

pub use config::SaturationConfig;
pub use error::{KernelError, KernelResult};
pub use formula::{evaluate, Evaluator, Stage, Trace};

#[cfg(test)]
pub mod tests;
