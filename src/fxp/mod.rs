// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point primitives.

pub mod ops;
