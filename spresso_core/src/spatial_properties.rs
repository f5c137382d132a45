/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Assembles per-grid-point effective mobility, diffusivity, ionic
//! conductivity, and the electro-diffusive pseudo-potential term from a
//! converged `cH` and degree-of-ionization tensor.

use spresso_tensor::{Array2, Array3, Point2};

use crate::constants::{FARADAY, GAS_CONST, KW, MOBILITY_H, MOBILITY_OH, TEMPERATURE, UNIT};
use crate::errors::NonPositiveConductivity;
use crate::species::SpeciesTable;

/// Per-grid-point spatial properties frozen for the duration of one RK
/// step.
#[derive(Debug, Clone)]
pub struct SpatialProperties {
    pub u_eff: Array2,
    pub d_eff: Array2,
    pub sigma: Vec<f64>,
    pub s_aux: Vec<f64>,
}

/// Computes `u_eff`, `d_eff`, `σ`, `s_aux` from `cH`, `C`, and `G`.
/// Fails with `NonPositiveConductivity` if `σ[n] <= 0` at any grid point,
/// which indicates a corrupt state rather than a recoverable excursion.
pub fn compute(
    species: &SpeciesTable,
    c_m3: &Array2,
    c_h: &[f64],
    g: &Array3,
) -> Result<SpatialProperties, NonPositiveConductivity> {
    let s_len = species.species_len();
    let n_len = c_h.len();

    let mut u_eff = Array2::zeros(s_len, n_len);
    let mut d_eff = Array2::zeros(s_len, n_len);
    let mut alpha = Array2::zeros(s_len, n_len);
    let mut beta = Array2::zeros(s_len, n_len);

    for s in 0..s_len {
        let z_row = species.z_row(s);
        let u_row = species.u_row(s);
        let d_row = species.d_row(s);
        for n in 0..n_len {
            let lane = g.lane(s, n);
            let (mut ue, mut de, mut a, mut b) = (0.0, 0.0, 0.0, 0.0);
            for k in 0..lane.len() {
                let gk = lane[k];
                ue += u_row[k] * gk;
                de += d_row[k] * gk;
                a += z_row[k] * u_row[k] * gk;
                b += z_row[k] * d_row[k] * gk;
            }
            let p = Point2::new(s, n);
            u_eff.set(p, ue);
            d_eff.set(p, de);
            alpha.set(p, FARADAY * a);
            beta.set(p, FARADAY * b);
        }
    }

    let mut sigma = vec![0.0; n_len];
    let mut s_aux = vec![0.0; n_len];
    for n in 0..n_len {
        let ch = c_h[n];
        let mut sigma_n = UNIT * FARADAY * (MOBILITY_H * ch + MOBILITY_OH * KW / ch);
        let mut s_aux_n = UNIT * GAS_CONST * TEMPERATURE * (MOBILITY_H * ch - MOBILITY_OH * KW / ch);
        for s in 0..s_len {
            let c_sn = c_m3.get(Point2::new(s, n));
            sigma_n += alpha.get(Point2::new(s, n)) * c_sn;
            s_aux_n += beta.get(Point2::new(s, n)) * c_sn;
        }
        if sigma_n <= 0.0 {
            tracing::warn!(grid_index = n, sigma = sigma_n, "non-positive conductivity");
            return Err(NonPositiveConductivity { grid_index: n, value: sigma_n });
        }
        sigma[n] = sigma_n;
        s_aux[n] = s_aux_n;
    }

    Ok(SpatialProperties { u_eff, d_eff, sigma, s_aux })
}
