/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Per-step orchestration: `Equilibrate` → `SpatialProperties` →
//! `RkStepper`, with the spatial coefficients frozen across the whole
//! step's RK stages.

use crate::config::SolverConfig;
use crate::equilibrate;
use crate::errors::SpressoError;
use crate::rk_stepper::RkStepper;
use crate::spatial_properties;
use crate::species::SpeciesTable;
use crate::state::State;

/// Outcome of one accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub dt_used: f64,
    pub dt_next: f64,
}

/// Couples the three kernels and owns the embedded RK tableau. Stateless
/// beyond its configuration: all scratch tensors live for the duration
/// of a single `step` call.
#[derive(Debug, Clone)]
pub struct StepDriver {
    config: SolverConfig,
    stepper: RkStepper,
}

impl StepDriver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config, stepper: RkStepper::new() }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Advances `state` by approximately `dt`, mutating it in place on
    /// success. `species` is read-only and may be shared across
    /// concurrent independent runs.
    #[tracing::instrument(skip(self, species, state), fields(species_len = state.species_len(), grid_len = state.grid_len()))]
    pub fn step(
        &self,
        species: &SpeciesTable,
        state: &mut State,
        dt: f64,
    ) -> Result<StepOutcome, SpressoError> {
        debug_assert_eq!(state.species_len(), species.species_len());

        let (c_h, g) = equilibrate::equilibrate(species, &state.c, &state.c_h, false, &self.config)?;
        let props = spatial_properties::compute(species, &state.c, &c_h, &g)?;

        let (c_next, dt_used, dt_next) = self.stepper.advance(
            &state.c,
            &props,
            self.config.current,
            self.config.dx,
            dt,
            &self.config,
        )?;

        state.c = c_next;
        state.c_h = c_h;
        state.t += dt_used;
        state.dt_next = dt_next;

        Ok(StepOutcome { dt_used, dt_next })
    }
}
