/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

#![forbid(unsafe_code)]

//! Fixed-shape dense array storage backing the Spresso numerical core.
//!
//! The simulator's state is a handful of rectangular arrays indexed by
//! species, grid point, and (for the degree-of-ionization tensor) valence
//! offset. This crate provides row-major storage for those shapes without
//! any knowledge of what the numbers mean.

pub mod array2;
pub mod array3;
pub mod error;
pub mod point;

pub use array2::Array2;
pub use array3::Array3;
pub use error::TensorError;
pub use point::{Point2, Point3};
