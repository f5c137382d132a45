/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

#![forbid(unsafe_code)]

//! Numerical core of the Spresso one-dimensional electrophoresis
//! simulator: instantaneous acid-base equilibrium coupled to a SLIP
//! transport scheme integrated by an embedded Dormand-Prince pair.
//!
//! Control flow per step:
//!
//! ```text
//! StepDriver::step(state, dt)
//!   -> equilibrate::equilibrate      yields cH and the degree-of-ionization tensor G
//!   -> spatial_properties::compute   yields u_eff, d_eff, sigma, s_aux
//!   -> RkStepper::advance            yields the updated C, dt_used, dt_next
//! ```

pub mod config;
pub mod constants;
pub mod equilibrate;
pub mod errors;
pub mod flux_kernel;
pub mod numeric;
pub mod rk_stepper;
pub mod spatial_properties;
pub mod species;
pub mod state;
pub mod step_driver;

pub use config::SolverConfig;
pub use rk_stepper::RkStepper;
pub use spatial_properties::SpatialProperties;
pub use species::SpeciesTable;
pub use state::State;
pub use step_driver::{StepDriver, StepOutcome};
