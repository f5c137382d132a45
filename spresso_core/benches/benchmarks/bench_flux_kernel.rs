/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Spresso Authors. All Rights Reserved.
 */

use criterion::{criterion_group, Criterion};

use spresso_core::config::SolverConfig;
use spresso_core::equilibrate::equilibrate;
use spresso_core::flux_kernel::rhs;
use spresso_core::spatial_properties::compute;

use crate::benchmarks::fixtures::{concentration_field, two_species_table};

fn flux_kernel_large_grid(criterion: &mut Criterion) {
    let species = two_species_table();
    let cfg = SolverConfig::default();
    let c = concentration_field(2048);
    let ch0 = vec![1e-7; 2048];
    let (c_h, g) = equilibrate(&species, &c, &ch0, false, &cfg).unwrap();
    let props = compute(&species, &c, &c_h, &g).unwrap();

    criterion.bench_function("flux_kernel_rhs_2048_points", |b| {
        b.iter(|| rhs(&c, &props, cfg.current, cfg.dx))
    });
}

criterion_group! {
    name = flux_kernel;
    config = Criterion::default().sample_size(50);
    targets = flux_kernel_large_grid
}
