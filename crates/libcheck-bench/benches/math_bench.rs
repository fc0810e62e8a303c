//! Tangent benchmarks over the regions the conformance suite exercises.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use libcheck_core::math::tan;

fn bench_tan_points(c: &mut Criterion) {
    let points: &[(&str, f64)] = &[
        ("zero", 0.0),
        ("pi_4", FRAC_PI_4),
        ("pi_3", FRAC_PI_3),
        ("near_pi_2", FRAC_PI_2),
        ("large", 1.0e6),
        ("nan", f64::NAN),
        ("inf", f64::INFINITY),
    ];
    let mut group = c.benchmark_group("tan");

    for &(label, x) in points {
        group.bench_with_input(BenchmarkId::new("point", label), &x, |b, &x| {
            b.iter(|| black_box(tan(black_box(x))));
        });
    }
    group.finish();
}

fn bench_tan_sweep(c: &mut Criterion) {
    const STEPS: usize = 1024;
    let inputs: Vec<f64> = (0..STEPS)
        .map(|i| -FRAC_PI_2 + (i as f64 + 0.5) * (std::f64::consts::PI / STEPS as f64))
        .collect();

    c.bench_function("tan/sweep_open_interval", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for &x in &inputs {
                acc += tan(black_box(x));
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_tan_points, bench_tan_sweep);
criterion_main!(benches);
