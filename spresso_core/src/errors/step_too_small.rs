/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

/// Raised when the adaptive RK controller exhausts its retry cap without
/// producing a step whose error estimate is within `tol`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTooSmall {
    pub retries: usize,
    pub last_dt: f64,
    pub last_error: f64,
}

impl Error for StepTooSmall {}

impl fmt::Display for StepTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StepTooSmall: {} retries exhausted, last dt={:e}, last error={:e}",
            self.retries, self.last_dt, self.last_error
        )
    }
}
