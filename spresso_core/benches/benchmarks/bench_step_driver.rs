/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use spresso_core::config::SolverConfig;
use spresso_core::{State, StepDriver};

use crate::benchmarks::fixtures::{concentration_field, two_species_table};

fn full_step_small_grid(criterion: &mut Criterion) {
    let species = two_species_table();
    let driver = StepDriver::new(SolverConfig::default());

    criterion.bench_function("step_driver_64_points", |b| {
        b.iter_batched(
            || State::new(concentration_field(64), vec![1e-7; 64], 0.1),
            |mut state| driver.step(&species, &mut state, 0.1).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group! {
    name = step_driver;
    config = Criterion::default().sample_size(30);
    targets = full_step_small_grid
}
