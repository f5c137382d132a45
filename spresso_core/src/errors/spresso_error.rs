/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use crate::errors::{EquilibriumDiverged, NonPositiveConductivity, StepTooSmall};

/// The error a single `StepDriver::step` call can fail with, covering
/// whichever of the three coupled kernels gave up first.
#[derive(Debug, Clone, PartialEq)]
pub enum SpressoError {
    Equilibrium(EquilibriumDiverged),
    Conductivity(NonPositiveConductivity),
    Step(StepTooSmall),
}

impl Error for SpressoError {}

impl fmt::Display for SpressoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpressoError::Equilibrium(e) => write!(f, "{e}"),
            SpressoError::Conductivity(e) => write!(f, "{e}"),
            SpressoError::Step(e) => write!(f, "{e}"),
        }
    }
}

impl From<EquilibriumDiverged> for SpressoError {
    fn from(err: EquilibriumDiverged) -> Self {
        SpressoError::Equilibrium(err)
    }
}

impl From<NonPositiveConductivity> for SpressoError {
    fn from(err: NonPositiveConductivity) -> Self {
        SpressoError::Conductivity(err)
    }
}

impl From<StepTooSmall> for SpressoError {
    fn from(err: StepTooSmall) -> Self {
        SpressoError::Step(err)
    }
}
