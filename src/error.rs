// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::config::{MAX_BIT_WIDTH, MIN_BIT_WIDTH};
use crate::formula::Stage;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Requested bit width has no valid signed range in an `i64` result.
    #[error("bit width {0} outside supported range {min}..={max}", min = MIN_BIT_WIDTH, max = MAX_BIT_WIDTH)]
    InvalidBitWidth(u32),

    /// A narrow (`i64`) intermediate left its range. Only the checked path reports this.
    #[error("i64 overflow while computing {stage}")]
    Overflow { stage: Stage },
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
