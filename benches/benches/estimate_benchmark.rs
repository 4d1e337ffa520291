//! Estimation benchmarks across presets and content profiles.
//!
//! Run with: `cargo bench --package readtime-bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use readtime_bench::{CONTENT_PROFILES, IMAGE_COUNTS};
use readtime_estimate::{Estimator, FAST, SLOW, STANDARD};

fn presets() -> [(&'static str, &'static Estimator); 3] {
    [("standard", &STANDARD), ("fast", &FAST), ("slow", &SLOW)]
}

fn estimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    for (preset, estimator) in presets() {
        for profile in CONTENT_PROFILES {
            group.bench_with_input(
                BenchmarkId::new(preset, profile.name),
                &profile.stats,
                |b, stats| b.iter(|| estimator.estimate(black_box(stats))),
            );
        }
    }

    group.finish();
}

fn images_time_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("images_time");

    for images in IMAGE_COUNTS {
        group.throughput(Throughput::Elements(images));
        group.bench_with_input(BenchmarkId::from_parameter(images), &images, |b, &images| {
            b.iter(|| STANDARD.images_time(black_box(images)));
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark, images_time_benchmark);
criterion_main!(benches);
