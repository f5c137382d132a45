/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

//! Physical constants used across the equilibrium and transport kernels.

/// Faraday constant, C·mol⁻¹.
pub const FARADAY: f64 = 96_500.0;
/// Gas constant, J·(mol·K)⁻¹.
pub const GAS_CONST: f64 = 8.314;
/// Fixed room temperature, K. Thermal effects are out of scope.
pub const TEMPERATURE: f64 = 298.0;
/// Mobility of H⁺, m²·V⁻¹·s⁻¹.
pub const MOBILITY_H: f64 = 362e-9;
/// Mobility of OH⁻, m²·V⁻¹·s⁻¹.
pub const MOBILITY_OH: f64 = 205e-9;
/// Ion product of water, (mol·L⁻¹)².
pub const KW: f64 = 1e-14;
/// Converts mol·L⁻¹ to mol·m⁻³ and back.
pub const UNIT: f64 = 1e3;
