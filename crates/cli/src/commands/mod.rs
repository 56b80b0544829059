use anyhow::Context;
use satq_kernel::SaturationConfig;

pub mod cases;
pub mod eval;

/// Build the kernel config from a user-supplied `--bit-width`.
pub fn resolve_config(bit_width: u32) -> anyhow::Result<SaturationConfig> {
    let config = SaturationConfig::new(bit_width).context("Invalid --bit-width")?;
    tracing::debug!(
        bit_width,
        min = config.min_val(),
        max = config.max_val(),
        "saturation bounds resolved"
    );
    Ok(config)
}
