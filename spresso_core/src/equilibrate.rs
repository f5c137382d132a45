/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Vectorized Newton solver for the hydrogen-ion concentration that
//! balances charge and mass at every grid point simultaneously.

use spresso_tensor::{Array2, Array3, Point2};

use crate::config::SolverConfig;
use crate::constants::{KW, UNIT};
use crate::errors::EquilibriumDiverged;
use crate::numeric::{divide_no_nan, norm2, powers};
use crate::species::SpeciesTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Approximate,
    Exact,
}

enum PassResult {
    Converged(Vec<f64>),
    NonPositive,
    CapExceeded,
}

/// One species' ionization polynomial `P_s`, its charge-weighted moment
/// `Q_s = Σ_k z_k L_k cH^k`, and the squared-charge moment
/// `R_s = Σ_k z_k² L_k cH^k` used by the approximate-mode derivative.
fn species_moments(l_row: &[f64], z_row: &[f64], pow: &[f64]) -> (f64, f64, f64) {
    let mut p = 0.0;
    let mut q = 0.0;
    let mut r = 0.0;
    for k in 0..l_row.len() {
        let term = l_row[k] * pow[k];
        p += term;
        q += z_row[k] * term;
        r += z_row[k] * z_row[k] * term;
    }
    (p, q, r)
}

/// Newton iteration for a single mode, over the whole grid at once. The
/// residual and step norms used for the stopping test are global 2-norms
/// over all `N` grid points, matching `Equilibrate`'s "vectorized across
/// all grid points" contract: one Newton loop advances every point's
/// `cH` together rather than converging them independently.
fn newton_pass(
    species: &SpeciesTable,
    c_m3: &Array2,
    ch_init: &[f64],
    mode: Mode,
    relative: bool,
    cfg: &SolverConfig,
) -> PassResult {
    let grid_len = ch_init.len();
    let mut ch = ch_init.to_vec();
    let max_k = species.valence_len().saturating_sub(1);

    for _ in 0..cfg.newton_max_iter {
        let mut f = vec![0.0; grid_len];
        let mut f_prime = vec![0.0; grid_len];

        for n in 0..grid_len {
            let pow = powers(ch[n], max_k);
            let mut f_n = ch[n] - divide_no_nan(KW, ch[n]);
            let mut fp_n = 1.0 + divide_no_nan(KW, ch[n] * ch[n]);
            let mut coupling = 0.0;

            for s in 0..species.species_len() {
                let (p_s, q_s, r_s) = species_moments(species.l_row(s), species.z_row(s), &pow);
                let c_moll = c_m3.get(Point2::new(s, n)) / UNIT;
                let m_s = divide_no_nan(c_moll, p_s);

                f_n += q_s * m_s;
                fp_n += divide_no_nan(r_s * m_s, ch[n]);
                if mode == Mode::Exact {
                    coupling += divide_no_nan(q_s * q_s * m_s, p_s);
                }
            }
            if mode == Mode::Exact {
                fp_n -= coupling;
            }
            f[n] = f_n;
            f_prime[n] = fp_n;
        }

        let mut delta = vec![0.0; grid_len];
        let mut ch_new = vec![0.0; grid_len];
        for n in 0..grid_len {
            delta[n] = divide_no_nan(f[n], f_prime[n]);
            ch_new[n] = ch[n] - delta[n];
        }
        if ch_new.iter().any(|&v| v <= 0.0) {
            return PassResult::NonPositive;
        }

        let norm_f = norm2(&f);
        let norm_delta = norm2(&delta);
        ch = ch_new;
        let max_ch = ch.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let absolute_ok = norm_f < cfg.newton_tol_residual && norm_delta < cfg.newton_tol_delta;
        let relative_ok = relative && divide_no_nan(norm_delta, max_ch) < cfg.newton_tol_relative;
        if absolute_ok || relative_ok {
            return PassResult::Converged(ch);
        }
    }
    PassResult::CapExceeded
}

/// `G[s,n,k] = L[s,k] · cH[n]^k / P_s(cH[n])`, the degree-of-ionization
/// tensor, built from a converged `cH`.
fn degree_of_ionization(species: &SpeciesTable, ch: &[f64]) -> Array3 {
    let s_len = species.species_len();
    let n_len = ch.len();
    let d_len = species.valence_len();
    let mut g = Array3::zeros(s_len, n_len, d_len);

    for n in 0..n_len {
        let pow = powers(ch[n], d_len.saturating_sub(1));
        for s in 0..s_len {
            let l_row = species.l_row(s);
            let p_s: f64 = l_row.iter().zip(pow.iter()).map(|(l, p)| l * p).sum();
            let lane = g.lane_mut(s, n);
            for (k, slot) in lane.iter_mut().enumerate() {
                *slot = divide_no_nan(l_row[k] * pow[k], p_s);
            }
        }
    }
    g
}

/// Solves for `cH[N]` and the degree-of-ionization tensor `G[S,N,D]`
/// given analytical concentrations `C[S,N]` (mol·m⁻³) and a warm-start
/// `cH0[N]` (mol·L⁻¹).
///
/// Tries the fast approximate-derivative mode first; falls back to the
/// robust exact mode (restarting from `cH0`) if the approximate mode
/// produces a non-positive `cH` or exhausts its iteration cap. Fails
/// with `EquilibriumDiverged` if the exact mode also fails.
#[tracing::instrument(skip(species, c_m3, ch0, cfg))]
pub fn equilibrate(
    species: &SpeciesTable,
    c_m3: &Array2,
    ch0: &[f64],
    relative: bool,
    cfg: &SolverConfig,
) -> Result<(Vec<f64>, Array3), EquilibriumDiverged> {
    let ch_final = match newton_pass(species, c_m3, ch0, Mode::Approximate, relative, cfg) {
        PassResult::Converged(ch) => ch,
        PassResult::NonPositive | PassResult::CapExceeded => {
            tracing::debug!("approximate-mode Newton failed, retrying in exact mode");
            match newton_pass(species, c_m3, ch0, Mode::Exact, relative, cfg) {
                PassResult::Converged(ch) => ch,
                PassResult::NonPositive => {
                    tracing::warn!("exact-mode Newton produced a non-positive cH");
                    return Err(EquilibriumDiverged::NonPositiveConcentration);
                }
                PassResult::CapExceeded => {
                    tracing::warn!("exact-mode Newton exceeded the iteration cap");
                    return Err(EquilibriumDiverged::IterationCapExceeded {
                        iterations: cfg.newton_max_iter,
                    });
                }
            }
        }
    };

    let g = degree_of_ionization(species, &ch_final);
    Ok((ch_final, g))
}

/// One-shot initial-pH solve: uniform warm start `cH ≡ 1e-7` mol·L⁻¹ and
/// the relative stopping criterion, per the `Equilibrate` reuse note.
pub fn initial_ph(
    species: &SpeciesTable,
    c_m3: &Array2,
    cfg: &SolverConfig,
) -> Result<Vec<f64>, EquilibriumDiverged> {
    let ch0 = vec![1e-7; c_m3.cols()];
    equilibrate(species, c_m3, &ch0, true, cfg).map(|(ch, _)| ch)
}
