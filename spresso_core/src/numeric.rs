/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Small numeric helpers shared by Equilibrate and RkStepper.

/// `a / b`, defined as `0` when `b == 0` instead of producing `NaN` or
/// `inf`. Used for the ionization fractions and the SLIP limiter.
#[inline]
pub fn divide_no_nan(a: f64, b: f64) -> f64 {
    if b == 0.0 { 0.0 } else { a / b }
}

/// `[cH^0, cH^1, .. cH^max_k]`, computed via an exclusive prefix sum of
/// `ln(cH)` followed by exponentiation, so index 0 is exactly `1.0`
/// regardless of floating-point rounding and extreme pH does not
/// overflow intermediate powers.
pub fn powers(ch: f64, max_k: usize) -> Vec<f64> {
    let log_ch = ch.ln();
    let mut out = Vec::with_capacity(max_k + 1);
    let mut acc = 0.0;
    for _ in 0..=max_k {
        out.push(acc.exp());
        acc += log_ch;
    }
    out
}

/// Euclidean (2-) norm.
pub fn norm2(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Van-Leer-style limiter: `0.5 * (1 - |(x-y)/(|x|+|y|)|^2) * (x + y)`,
/// with the `0/0 = 0` guard applied when both inputs are zero.
#[inline]
pub fn limiter(x: f64, y: f64) -> f64 {
    let denom = x.abs() + y.abs();
    if denom == 0.0 {
        return 0.0;
    }
    let r = divide_no_nan(x - y, denom);
    0.5 * (1.0 - r * r) * (x + y)
}
