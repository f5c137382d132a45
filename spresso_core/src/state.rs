/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use spresso_tensor::Array2;

/// The mutable simulation state, carried step to step by `StepDriver`.
#[derive(Debug, Clone)]
pub struct State {
    /// Analytical (total) concentration of each species at each grid
    /// point, mol·m⁻³.
    pub c: Array2,
    /// Hydrogen-ion concentration, mol·L⁻¹. Carried across steps as the
    /// Newton warm start for the next `Equilibrate` call.
    pub c_h: Vec<f64>,
    /// Simulated time.
    pub t: f64,
    /// Suggested next step size, as returned by the previous accepted step.
    pub dt_next: f64,
}

impl State {
    pub fn new(c: Array2, c_h: Vec<f64>, dt_next: f64) -> Self {
        debug_assert_eq!(c.cols(), c_h.len());
        Self { c, c_h, t: 0.0, dt_next }
    }

    pub fn grid_len(&self) -> usize {
        self.c_h.len()
    }

    pub fn species_len(&self) -> usize {
        self.c.rows()
    }
}
