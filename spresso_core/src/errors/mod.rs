/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

mod equilibrium_diverged;
mod invalid_species;
mod non_positive_conductivity;
mod spresso_error;
mod step_too_small;

pub use equilibrium_diverged::*;
pub use invalid_species::*;
pub use non_positive_conductivity::*;
pub use spresso_error::*;
pub use step_too_small::*;
