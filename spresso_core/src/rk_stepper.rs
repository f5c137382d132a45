/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Embedded Dormand-Prince 5(4) integrator with PI-free adaptive step
//! control. Coefficients are frozen for the whole step (`SpatialProperties`
//! is not recomputed between RK stages), per `StepDriver`'s contract.

use spresso_tensor::Array2;

use crate::config::SolverConfig;
use crate::errors::StepTooSmall;
use crate::flux_kernel;
use crate::numeric::norm2;
use crate::spatial_properties::SpatialProperties;

// Dormand-Prince stage coefficients. Node-time fractions (C2..C5) are
// omitted: the RHS here has no explicit t dependence, so stages never need
// them.
const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;
const A71: f64 = 35.0 / 384.0;
const A73: f64 = 500.0 / 1113.0;
const A74: f64 = 125.0 / 192.0;
const A75: f64 = -2187.0 / 6784.0;
const A76: f64 = 11.0 / 84.0;

// Fifth-order solution weights equal the seventh stage's (FSAL).
const B5: [f64; 7] = [A71, 0.0, A73, A74, A75, A76, 0.0];
// Fourth-order solution weights.
const B4: [f64; 7] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// `base + dt * Σ coef_i * term_i`, elementwise.
fn combine(base: &Array2, dt: f64, terms: &[(f64, &Array2)]) -> Array2 {
    let mut out = base.clone();
    for (i, slot) in out.as_mut_slice().iter_mut().enumerate() {
        let mut acc = 0.0;
        for (coef, arr) in terms {
            acc += coef * arr.as_slice()[i];
        }
        *slot += dt * acc;
    }
    out
}

fn weighted_sum(base: &Array2, dt: f64, stages: &[Array2; 7], weights: &[f64; 7]) -> Array2 {
    let terms: Vec<(f64, &Array2)> = weights
        .iter()
        .copied()
        .zip(stages.iter())
        .filter(|(w, _)| *w != 0.0)
        .collect();
    combine(base, dt, &terms)
}

/// Embedded 5(4) Runge-Kutta stepper, owning nothing but its tableau: the
/// frozen coefficients and the concentration field are passed in fresh
/// for every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RkStepper;

impl RkStepper {
    pub fn new() -> Self {
        Self
    }

    /// Advances `c` by approximately `dt`, shrinking and retrying under
    /// the PI-free step controller until the error estimate is within
    /// `cfg.rk_tol` or the retry cap is exhausted.
    ///
    /// Returns the accepted concentration field, the `dt` actually used,
    /// and the `dt` suggested for the next step.
    #[tracing::instrument(skip(self, c, props, cfg))]
    pub fn advance(
        &self,
        c: &Array2,
        props: &SpatialProperties,
        current: f64,
        dx: f64,
        dt: f64,
        cfg: &SolverConfig,
    ) -> Result<(Array2, f64, f64), StepTooSmall> {
        let mut dt = dt;
        let mut last_error = f64::INFINITY;

        for retry in 0..cfg.rk_max_retries {
            let f = |state: &Array2| flux_kernel::rhs(state, props, current, dx);

            let k1 = f(c);
            let k2 = f(&combine(c, dt, &[(A21, &k1)]));
            let k3 = f(&combine(c, dt, &[(A31, &k1), (A32, &k2)]));
            let k4 = f(&combine(c, dt, &[(A41, &k1), (A42, &k2), (A43, &k3)]));
            let k5 = f(&combine(c, dt, &[(A51, &k1), (A52, &k2), (A53, &k3), (A54, &k4)]));
            let k6 = f(&combine(
                c,
                dt,
                &[(A61, &k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)],
            ));
            let stage6 = combine(
                c,
                dt,
                &[(A71, &k1), (A73, &k3), (A74, &k4), (A75, &k5), (A76, &k6)],
            );
            let k7 = f(&stage6);

            let stages = [k1, k2, k3, k4, k5, k6, k7];
            let c5 = weighted_sum(c, dt, &stages, &B5);
            let c4 = weighted_sum(c, dt, &stages, &B4);

            let diff: Vec<f64> = c5
                .as_slice()
                .iter()
                .zip(c4.as_slice())
                .map(|(a, b)| a - b)
                .collect();
            let error = norm2(&diff);
            last_error = error;

            if error <= cfg.rk_tol {
                let ratio = if error == 0.0 {
                    10.0
                } else {
                    (cfg.rk_safety * (cfg.rk_tol / error).powf(1.0 / cfg.rk_exponent)).clamp(0.1, 10.0)
                };
                let dt_next = ratio * dt;
                return Ok((c5, dt, dt_next));
            }

            let ratio = (cfg.rk_safety * (cfg.rk_tol / error).powf(1.0 / cfg.rk_exponent)).clamp(0.1, 10.0);
            tracing::debug!(retry, error, dt, ratio, "rejected RK step, shrinking dt");
            dt *= ratio;
        }

        tracing::warn!(retries = cfg.rk_max_retries, last_error, "step too small");
        Err(StepTooSmall { retries: cfg.rk_max_retries, last_dt: dt, last_error })
    }
}
