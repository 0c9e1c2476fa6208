//! Criterion benchmarks for the recommendation engine.
//!
//! Sorting dominates aggregation, selection is quadratic in the shortlist
//! length at worst; both should stay far under a millisecond for realistic
//! catalog sizes.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use launchrec::catalog::AppId;
use launchrec::recommend::select;
use launchrec::usage::{UsageSample, aggregate};

fn synthetic_samples(apps: usize, fragments: usize) -> Vec<UsageSample> {
    (0..apps)
        .flat_map(|app| {
            (0..fragments).map(move |frag| UsageSample {
                app_id: AppId::new(format!("app.{app:04}")),
                foreground_ms: ((app * 37 + frag * 13) % 5_000) as u64,
            })
        })
        .collect()
}

fn aggregate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    let small = synthetic_samples(100, 4);
    group.throughput(Throughput::Elements(small.len() as u64));
    group.bench_function("100_apps_4_fragments", |b| {
        b.iter(|| aggregate(black_box(small.clone())));
    });

    let large = synthetic_samples(1_000, 8);
    group.throughput(Throughput::Elements(large.len() as u64));
    group.bench_function("1000_apps_8_fragments", |b| {
        b.iter(|| aggregate(black_box(large.clone())));
    });

    group.finish();
}

fn select_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    let ranked = aggregate(synthetic_samples(500, 4));

    group.bench_function("shortlist_15_of_500", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(17);
            select(black_box(&ranked), black_box(15), &mut rng).unwrap()
        });
    });

    group.bench_function("drain_500_of_500", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(17);
            select(black_box(&ranked), black_box(500), &mut rng).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, aggregate_benchmarks, select_benchmarks);
criterion_main!(benches);
