/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use spresso_core::config::SolverConfig;
use spresso_core::equilibrate::equilibrate;

use crate::benchmarks::fixtures::{concentration_field, two_species_table};

fn equilibrate_small_grid(criterion: &mut Criterion) {
    let species = two_species_table();
    let c = concentration_field(64);
    let ch0 = vec![1e-7; 64];
    let cfg = SolverConfig::default();

    criterion.bench_function("equilibrate_64_points", |b| {
        b.iter(|| equilibrate(&species, &c, &ch0, false, &cfg).unwrap())
    });
}

fn equilibrate_large_grid(criterion: &mut Criterion) {
    let species = two_species_table();
    let c = concentration_field(2048);
    let ch0 = vec![1e-7; 2048];
    let cfg = SolverConfig::default();

    criterion.bench_function("equilibrate_2048_points", |b| {
        b.iter(|| equilibrate(&species, &c, &ch0, false, &cfg).unwrap())
    });
}

criterion_group! {
    name = equilibrate;
    config = Criterion::default().sample_size(50);
    targets = equilibrate_small_grid, equilibrate_large_grid
}
