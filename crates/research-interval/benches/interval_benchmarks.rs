use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;
use research_interval::{credible_intervals, equal_tailed_interval, highest_density_interval};

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("CredibleIntervals");
    let sizes = [100, 1_000, 10_000, 100_000];

    for &size in &sizes {
        let data = generate_normal_data(size, 0.0, 1.0, 42);

        group.bench_with_input(BenchmarkId::new("hdi", size), &data, |b, data| {
            b.iter(|| highest_density_interval(black_box(data), 0.9))
        });
        group.bench_with_input(BenchmarkId::new("eti", size), &data, |b, data| {
            b.iter(|| equal_tailed_interval(black_box(data), 0.9))
        });
        group.bench_with_input(BenchmarkId::new("both", size), &data, |b, data| {
            b.iter(|| credible_intervals(black_box(data), 0.9))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intervals);
criterion_main!(benches);
