// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use crate::error::{KernelError, KernelResult};
use crate::fxp::ops::saturate;

/// Bit width used when none is configured (signed 8-bit, `[-128, 127]`).
pub const DEFAULT_BIT_WIDTH: u32 = 8;

/// Smallest bit width with a non-degenerate signed range (`[-2, 1]`).
pub const MIN_BIT_WIDTH: u32 = 2;

/// Largest bit width whose bounds fit the `i64` result type.
pub const MAX_BIT_WIDTH: u32 = 64;

/// Saturation bounds derived from a signed bit width `N`.
///
/// `max_val = 2^(N-1) - 1` and `min_val = -2^(N-1)`. The bounds are computed once
/// at construction and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaturationConfig {
    bit_width: u32,
    max_val: i64,
    min_val: i64,
}

impl SaturationConfig {
    pub const DEFAULT: SaturationConfig = SaturationConfig::from_bit_width(DEFAULT_BIT_WIDTH);

    /// Validating constructor for runtime-supplied widths.
    pub fn new(bit_width: u32) -> KernelResult<Self> {
        if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&bit_width) {
            return Err(KernelError::InvalidBitWidth(bit_width));
        }
        Ok(Self::from_bit_width(bit_width))
    }

    /// Const constructor for compile-time widths.
    ///
    /// Panics if `bit_width` is outside `MIN_BIT_WIDTH..=MAX_BIT_WIDTH`; in a
    /// `const` item that is a compile error.
    pub const fn from_bit_width(bit_width: u32) -> Self {
        assert!(
            bit_width >= MIN_BIT_WIDTH && bit_width <= MAX_BIT_WIDTH,
            "bit width out of range"
        );
        let half = 1i128 << (bit_width - 1);
        Self {
            bit_width,
            max_val: (half - 1) as i64,
            min_val: (-half) as i64,
        }
    }

    pub const fn bit_width(&self) -> u32 {
        self.bit_width
    }

    pub const fn max_val(&self) -> i64 {
        self.max_val
    }

    pub const fn min_val(&self) -> i64 {
        self.min_val
    }

    /// True if `value` is representable without saturation.
    pub const fn contains(&self, value: i128) -> bool {
        value >= self.min_val as i128 && value <= self.max_val as i128
    }

    /// Clamp a wide value into `[min_val, max_val]`.
    pub const fn clamp(&self, value: i128) -> i64 {
        saturate(value, self.min_val, self.max_val)
    }
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
