//! Performance measurement for the territory sweep

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;
use stoneflood::algorithm::bounds::occupied_bounding_box;
use stoneflood::algorithm::executor::{SweepConfig, TerritorySweep};
use stoneflood::algorithm::flood::doom_border_reachable;
use stoneflood::generation::scatter::{ScatterParams, scatter_stones};

/// Measures a complete run on the default-sized board
fn bench_full_sweep(c: &mut Criterion) {
    c.bench_function("full_sweep_100", |b| {
        b.iter(|| {
            let Ok(config) = SweepConfig::new(100, 100, 0.05, 0.7) else {
                return;
            };
            let sweep = TerritorySweep::new(config, 12_345);
            let Ok(outcome) = sweep.execute() else {
                return;
            };
            black_box(outcome.tally);
        });
    });
}

/// Measures the border sweep alone over a pre-generated 500x500 board
fn bench_border_sweep(c: &mut Criterion) {
    let params = ScatterParams {
        seed_probability: 0.05,
        spread_probability: 0.7,
    };
    let mut rng = StdRng::seed_from_u64(12_345);
    let board = scatter_stones(500, 500, params, &mut rng, &mut None);
    let Ok(bounds) = occupied_bounding_box(&board) else {
        return;
    };

    c.bench_function("border_sweep_500", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            doom_border_reachable(&mut scratch, &bounds, &mut None);
            black_box(scratch.cell_count());
        });
    });
}

criterion_group!(benches, bench_full_sweep, bench_border_sweep);
criterion_main!(benches);
