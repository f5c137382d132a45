/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! SLIP (symmetric limited positive) spatial right-hand side: centered
//! advective flux, molecular diffusion, electro-diffusion, and a
//! van-Leer-limited numerical-diffusion term, evaluated at every
//! interior interface and reduced to a per-cell `∂C/∂t`.

use spresso_tensor::{Array2, Point2};

use crate::numeric::limiter;
use crate::spatial_properties::SpatialProperties;

/// Evaluates `∂C/∂t[s,n]` given the current concentration field and the
/// spatial properties frozen for this step. `grid_len` must be `>= 3`.
pub fn rhs(c: &Array2, props: &SpatialProperties, current: f64, dx: f64) -> Array2 {
    let s_len = c.rows();
    let n_len = c.cols();
    let mut d_c_dt = Array2::zeros(s_len, n_len);
    if n_len < 2 {
        return d_c_dt;
    }

    // Unscaled and current-scaled electromigration factors per species.
    let mut phi = Array2::zeros(s_len, n_len);
    let mut phi0 = Array2::zeros(s_len, n_len);
    for s in 0..s_len {
        for n in 0..n_len {
            let p = Point2::new(s, n);
            let base = props.u_eff.get(p) * c.get(p) / props.sigma[n];
            phi0.set(p, base);
            phi.set(p, current * base);
        }
    }

    // Maximum wave speed at each interior interface, reduced over species.
    let mut v_max = vec![0.0; n_len - 1];
    for m in 0..n_len - 1 {
        let mut max_speed: f64 = 0.0;
        for s in 0..s_len {
            let speed = 0.5
                * current
                * (props.u_eff.get(Point2::new(s, m + 1)) / props.sigma[m + 1]
                    + props.u_eff.get(Point2::new(s, m)) / props.sigma[m]);
            max_speed = max_speed.max(speed.abs());
        }
        v_max[m] = max_speed;
    }

    // Interface flux F[s,m] for m = 0 ..= n_len - 2.
    let mut flux = Array2::zeros(s_len, n_len - 1);
    for s in 0..s_len {
        // ΔC padded with zero on both ends: delta_ext[i] corresponds to
        // ΔC[s, i-1] for i in 0..=n_len-1, i.e. index -1 maps to 0 and
        // index n_len-1 maps to n_len (also padded to zero).
        let mut delta_ext = vec![0.0; n_len + 1];
        for m in 0..n_len - 1 {
            delta_ext[m + 1] = c.get(Point2::new(s, m + 1)) - c.get(Point2::new(s, m));
        }

        for m in 0..n_len - 1 {
            let p_next = Point2::new(s, m + 1);
            let p_this = Point2::new(s, m);

            let f_adv = 0.5 * (phi.get(p_next) + phi.get(p_this));
            let f_mol = (props.d_eff.get(p_next) * c.get(p_next)
                - props.d_eff.get(p_this) * c.get(p_this))
                / dx;
            let f_ed = 0.5 * (phi0.get(p_next) + phi0.get(p_this)) * (props.s_aux[m + 1] - props.s_aux[m])
                / dx;

            let delta_here = delta_ext[m + 1];
            let delta_next = delta_ext[m + 2];
            let delta_prev = delta_ext[m];
            let f_num = 0.5 * v_max[m] * (delta_here - limiter(delta_next, delta_prev));

            flux.set(Point2::new(s, m), f_adv + (f_ed - f_mol) - f_num);
        }
    }

    // Cell gradients.
    for s in 0..s_len {
        let left = (phi.get(Point2::new(s, 0)) - flux.get(Point2::new(s, 0))) / dx;
        d_c_dt.set(Point2::new(s, 0), left);

        for n in 1..n_len - 1 {
            let grad = -(flux.get(Point2::new(s, n)) - flux.get(Point2::new(s, n - 1))) / dx;
            d_c_dt.set(Point2::new(s, n), grad);
        }

        let right = (flux.get(Point2::new(s, n_len - 2)) - phi.get(Point2::new(s, n_len - 1))) / dx;
        d_c_dt.set(Point2::new(s, n_len - 1), right);
    }

    d_c_dt
}
