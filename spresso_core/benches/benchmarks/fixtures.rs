/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use spresso_core::SpeciesTable;
use spresso_tensor::{Array2, Point2};

/// A weak monovalent acid/base pair, two species wide, used across the
/// benchmark suite so every benchmark exercises the same coupling cost.
pub fn two_species_table() -> SpeciesTable {
    let l = Array2::from_vec(2, 2, vec![1.0, 4.5e-5, 1.0, 1.8e-5]).unwrap();
    let z = Array2::from_vec(2, 2, vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
    let u = Array2::from_vec(2, 2, vec![0.0, 420e-9, 0.0, 330e-9]).unwrap();
    let d = Array2::from_vec(2, 2, vec![0.0, 1.1e-9, 0.0, 0.9e-9]).unwrap();
    SpeciesTable::new(l, z, u, d).unwrap()
}

/// A smooth concentration profile over `grid_len` points, two species
/// wide, with no discontinuities for the flux kernel to sharpen.
pub fn concentration_field(grid_len: usize) -> Array2 {
    let mut c = Array2::zeros(2, grid_len);
    for n in 0..grid_len {
        let x = n as f64 / grid_len as f64;
        c.set(Point2::new(0, n), 1.0 + 0.5 * (2.0 * std::f64::consts::PI * x).sin());
        c.set(Point2::new(1, n), 1.0 + 0.5 * (2.0 * std::f64::consts::PI * x).cos());
    }
    c
}
