//! Performance benchmarks for the pseudobound library.
//!
//! Run with: `cargo bench`
//!
//! Synthetic corridors approximate real distribution networks: short
//! segments laid end to end with positional jitter, plus occasional
//! spatial breaks that force new groups.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pseudobound::{
    LineFeature, PartitionConfig, PlanePoint, generate_boundaries, partition_features,
};
use rand::Rng;

/// Generate a corridor of jittered segments along the x axis.
///
/// Every `break_every` segments the corridor jumps far enough to fire
/// the gap trigger, mimicking disconnected network districts.
fn generate_corridor(feature_count: usize, break_every: usize) -> Vec<LineFeature> {
    let mut rng = rand::thread_rng();
    let mut x = 0.0f64;

    (0..feature_count)
        .map(|i| {
            if i > 0 && i % break_every == 0 {
                x += 50_000.0;
            }
            let y = rng.gen_range(-40.0..40.0);
            let length = rng.gen_range(0.05..0.5);
            let start = PlanePoint::new(x + rng.gen_range(-10.0..10.0), y);
            let end = PlanePoint::new(x + 120.0, y + rng.gen_range(-30.0..30.0));
            x += 120.0;

            LineFeature::new(format!("seg-{i}"), vec![start, end], length)
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let config = PartitionConfig::default();

    for size in [100, 1_000, 5_000] {
        let features = generate_corridor(size, 200);
        group.bench_with_input(BenchmarkId::from_parameter(size), &features, |b, features| {
            b.iter(|| {
                partition_features(black_box(features), &config)
                    .unwrap()
                    .len()
            })
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_boundaries");
    let config = PartitionConfig {
        length_threshold: 2.0,
        ..PartitionConfig::default()
    };

    for size in [100, 1_000] {
        let features = generate_corridor(size, 50);
        group.bench_with_input(BenchmarkId::from_parameter(size), &features, |b, features| {
            b.iter(|| {
                generate_boundaries(black_box(features), &config, "PB", "district")
                    .unwrap()
                    .len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition, bench_full_pipeline);
criterion_main!(benches);
