//! Fixed-point operations.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

/// Arithmetic right shift on a wide intermediate.
///
/// Sign-extending, so this is floor division by `2^shift`: `-3 >> 1 == -2`.
/// `shift` must be below 128.
#[inline]
pub const fn shr_floor(value: i128, shift: u32) -> i128 {
    value >> shift
}

/// Manual saturation of an `i128` intermediate into `[min, max]`.
#[inline]
pub const fn saturate(value: i128, min: i64, max: i64) -> i64 {
    if value > max as i128 {
        max
    } else if value < min as i128 {
        min
    } else {
        value as i64
    }
}

/// Bound for a term that overflowed `i128`; its sign alone picks the side.
#[inline]
pub const fn saturate_sign(negative: bool, min: i64, max: i64) -> i64 {
    if negative {
        min
    } else {
        max
    }
}
