/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

/// Raised by `SpeciesTable::new` when the `L`, `z`, `u`, `d` tables
/// violate the shape invariants spec'd for a species parameter table.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSpecies {
    /// `z`, `u`, or `d` does not have the same `(species, valence)` shape as `L`.
    ShapeMismatch,
    /// A species' `L` row is entirely zero, so its ionization polynomial
    /// is identically zero and cannot be inverted.
    EmptyIonizationRow { species_index: usize },
}

impl Error for InvalidSpecies {}

impl fmt::Display for InvalidSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSpecies::ShapeMismatch => {
                write!(f, "InvalidSpecies: L, z, u, d tables do not share one shape")
            }
            InvalidSpecies::EmptyIonizationRow { species_index } => {
                write!(
                    f,
                    "InvalidSpecies: species {species_index} has an all-zero L row"
                )
            }
        }
    }
}
