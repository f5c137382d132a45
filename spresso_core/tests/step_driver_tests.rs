/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use spresso_core::config::SolverConfig;
use spresso_core::errors::SpressoError;
use spresso_core::{SpeciesTable, State, StepDriver};
use spresso_tensor::Array2;

fn pure_water(grid_len: usize) -> (SpeciesTable, State) {
    let species = SpeciesTable::new(
        Array2::zeros(0, 1),
        Array2::zeros(0, 1),
        Array2::zeros(0, 1),
        Array2::zeros(0, 1),
    )
    .unwrap();
    let state = State::new(Array2::zeros(0, grid_len), vec![1e-7; grid_len], 1.0);
    (species, state)
}

#[test]
fn a_single_step_advances_time_by_dt_used() {
    let (species, mut state) = pure_water(4);
    let driver = StepDriver::new(SolverConfig::default());

    let outcome = driver.step(&species, &mut state, 0.5).unwrap();
    assert_eq!(outcome.dt_used, 0.5);
    assert!((state.t - 0.5).abs() < 1e-12);
    assert_eq!(state.dt_next, outcome.dt_next);
    for &ch in &state.c_h {
        assert!((ch - 1e-7).abs() < 1e-9);
    }
}

// Spec section 8, scenario 4: with zero diffusivity, zero mobility, and
// zero current, the right-hand side is exactly zero at every grid point,
// so the concentration field is bitwise unchanged after many steps.
#[test]
fn an_inert_field_is_bitwise_stable_over_a_hundred_steps() {
    let l = Array2::from_vec(1, 1, vec![1.0]).unwrap();
    let z = Array2::from_vec(1, 1, vec![0.0]).unwrap();
    let u = Array2::from_vec(1, 1, vec![0.0]).unwrap();
    let d = Array2::from_vec(1, 1, vec![0.0]).unwrap();
    let species = SpeciesTable::new(l, z, u, d).unwrap();

    let grid_len = 5;
    let mut c0 = Array2::zeros(1, grid_len);
    for (n, &value) in [1.0, 5.0, 2.0, 8.0, 3.0].iter().enumerate() {
        c0.set(spresso_tensor::Point2::new(0, n), value);
    }
    let original = c0.clone();
    let mut state = State::new(c0, vec![1e-7; grid_len], 0.1);
    let driver = StepDriver::new(SolverConfig::default());

    for _ in 0..100 {
        driver.step(&species, &mut state, 0.1).unwrap();
    }

    assert_eq!(state.c, original);
}

#[test]
fn the_driver_exposes_the_config_it_was_constructed_with() {
    let mut cfg = SolverConfig::default();
    cfg.dx = 2.5;
    cfg.current = 1.0e-5;
    let driver = StepDriver::new(cfg);

    assert_eq!(driver.config().dx, 2.5);
    assert_eq!(driver.config().current, 1.0e-5);
    assert_eq!(*driver.config(), cfg);
}

#[test]
fn a_non_positive_conductivity_failure_surfaces_through_spresso_error() {
    let l = Array2::from_vec(1, 1, vec![1.0]).unwrap();
    let z = Array2::from_vec(1, 1, vec![-1.0]).unwrap();
    let u = Array2::from_vec(1, 1, vec![1.0e3]).unwrap();
    let d = Array2::zeros(1, 1);
    let species = SpeciesTable::new(l, z, u, d).unwrap();

    let grid_len = 1;
    let mut c = Array2::zeros(1, grid_len);
    c.fill(1.0e7);
    let mut state = State::new(c, vec![1e-7; grid_len], 0.1);
    let driver = StepDriver::new(SolverConfig::default());

    let err = driver.step(&species, &mut state, 0.1).unwrap_err();
    assert!(matches!(err, SpressoError::Conductivity(_)));
}
