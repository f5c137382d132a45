/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

/// Tunable numerical parameters for one simulation run.
///
/// `spresso_core` is a library with no file-based configuration surface;
/// callers construct a `SolverConfig` in memory and pass it to
/// `StepDriver::new`. `Default` reproduces the reference tolerances and
/// iteration caps for the Newton and embedded-RK solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Grid spacing, m.
    pub dx: f64,
    /// Applied current, A.
    pub current: f64,
    /// Embedded RK error tolerance.
    pub rk_tol: f64,
    /// Adaptive step-control safety factor.
    pub rk_safety: f64,
    /// Adaptive step-control error-order exponent (`p` in `(tol/E)^(1/p)`).
    pub rk_exponent: f64,
    /// Retry cap before `StepTooSmall`.
    pub rk_max_retries: usize,
    /// Absolute residual norm threshold, `‖F‖₂`.
    pub newton_tol_residual: f64,
    /// Absolute step norm threshold, `‖Δ‖₂`.
    pub newton_tol_delta: f64,
    /// Relative step threshold, `‖Δ‖₂ / max(cH)`, used by the one-shot
    /// initial-pH solve.
    pub newton_tol_relative: f64,
    /// Newton iteration cap per mode (approximate, then exact).
    pub newton_max_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dx: 1.0,
            current: 0.0,
            rk_tol: 1e-6,
            rk_safety: 0.9,
            rk_exponent: 5.0,
            rk_max_retries: 20,
            newton_tol_residual: 1e-6,
            newton_tol_delta: 1e-9,
            newton_tol_relative: 1e-4,
            newton_max_iter: 50,
        }
    }
}
