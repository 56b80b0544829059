// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Saturating quantization formula.
//!
//! `q = sat(((a - b) * (1 + 3c) - 4d) >> 1)`

use core::fmt;

use crate::config::SaturationConfig;
use crate::error::{KernelError, KernelResult};
use crate::fxp::ops::{saturate_sign, shr_floor};

/// Descaling shift applied to `sub2`.
pub const SCALE_SHIFT: u32 = 1;

/// Intermediate step of the formula, used to report narrow-path overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// `a - b`
    Sub1,
    /// `1 + 3c`
    Add1,
    /// `4d`
    Mul3,
    /// `(a - b) * (1 + 3c)`
    Product,
    /// `product - 4d`
    Sub2,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term = match self {
            Stage::Sub1 => "a - b",
            Stage::Add1 => "1 + 3c",
            Stage::Mul3 => "4d",
            Stage::Product => "(a - b) * (1 + 3c)",
            Stage::Sub2 => "(a - b) * (1 + 3c) - 4d",
        };
        f.write_str(term)
    }
}

/// Every intermediate term of one evaluation.
///
/// `sub2` and `div` are `None` when the product overflowed `i128`; `q` is then
/// the bound on the side of the overflowed term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trace {
    pub sub1: i128,
    pub add1: i128,
    pub mul3: i128,
    pub sub2: Option<i128>,
    pub div: Option<i128>,
    pub q: i64,
}

impl Trace {
    /// True if saturation changed the value.
    pub fn saturated(&self) -> bool {
        self.div != Some(self.q as i128)
    }
}

/// Evaluates the formula under a fixed [`SaturationConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: SaturationConfig,
}

impl Evaluator {
    pub const fn new(config: SaturationConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> SaturationConfig {
        self.config
    }

    /// Total over all `i64` inputs; the result lies in `[min_val, max_val]`.
    pub fn evaluate(&self, a: i64, b: i64, c: i64, d: i64) -> i64 {
        self.trace(a, b, c, d).q
    }

    pub fn trace(&self, a: i64, b: i64, c: i64, d: i64) -> Trace {
        let (a, b, c, d) = (a as i128, b as i128, c as i128, d as i128);

        // Exact for i64 inputs: |a - b| <= 2^64, |1 + 3c| < 2^66, |4d| <= 2^65.
        let sub1 = a - b;
        let add1 = 1 + 3 * c;
        let mul3 = 4 * d;

        let sub2 = sub1
            .checked_mul(add1)
            .and_then(|product| product.checked_sub(mul3));
        let div = sub2.map(|v| shr_floor(v, SCALE_SHIFT));

        let q = match div {
            Some(div) => self.config.clamp(div),
            // |sub1 * add1| >= 2^127 here, so mul3 cannot flip the sign.
            // add1 is never zero (3c != -1), nor is sub1 once the product overflows.
            None => saturate_sign(
                (sub1 < 0) != (add1 < 0),
                self.config.min_val(),
                self.config.max_val(),
            ),
        };

        Trace {
            sub1,
            add1,
            mul3,
            sub2,
            div,
            q,
        }
    }

    /// Same formula in overflow-checked `i64` arithmetic.
    ///
    /// Agrees with [`Evaluator::evaluate`] whenever it returns `Ok`.
    pub fn evaluate_checked(&self, a: i64, b: i64, c: i64, d: i64) -> KernelResult<i64> {
        let overflow = |stage| KernelError::Overflow { stage };

        let sub1 = a.checked_sub(b).ok_or(overflow(Stage::Sub1))?;
        let add1 = c
            .checked_mul(3)
            .and_then(|t| t.checked_add(1))
            .ok_or(overflow(Stage::Add1))?;
        let mul3 = d.checked_mul(4).ok_or(overflow(Stage::Mul3))?;
        let product = sub1.checked_mul(add1).ok_or(overflow(Stage::Product))?;
        let sub2 = product.checked_sub(mul3).ok_or(overflow(Stage::Sub2))?;

        Ok(self.config.clamp(shr_floor(sub2 as i128, SCALE_SHIFT)))
    }
}

/// Evaluate with the default 8-bit configuration.
pub fn evaluate(a: i64, b: i64, c: i64, d: i64) -> i64 {
    Evaluator::new(SaturationConfig::DEFAULT).evaluate(a, b, c, d)
}
