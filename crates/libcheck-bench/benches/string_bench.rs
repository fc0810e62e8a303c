//! Bounded string function benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use libcheck_core::string::{strlcat, strlcpy, strlen};

const SIZES: &[usize] = &[16, 64, 256, 1024, 4096];

fn nul_terminated(len: usize, byte: u8) -> Vec<u8> {
    let mut s = vec![byte; len];
    s.push(0);
    s
}

fn bench_strlcpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("strlcpy");

    for &size in SIZES {
        let src = nul_terminated(size, b'A');
        group.throughput(Throughput::Bytes(size as u64));

        // Destination large enough for the whole source.
        group.bench_with_input(BenchmarkId::new("fits", size), &size, |b, &sz| {
            let mut dst = vec![0u8; sz + 1];
            b.iter(|| black_box(strlcpy(&mut dst, black_box(&src), sz + 1)));
        });

        // Destination half the source: copies half, still scans the full source.
        group.bench_with_input(BenchmarkId::new("truncated", size), &size, |b, &sz| {
            let mut dst = vec![0u8; sz / 2];
            b.iter(|| black_box(strlcpy(&mut dst, black_box(&src), sz / 2)));
        });
    }
    group.finish();
}

fn bench_strlcat(c: &mut Criterion) {
    let mut group = c.benchmark_group("strlcat");

    for &size in SIZES {
        let src = nul_terminated(size / 2, b'B');
        let prefix = nul_terminated(size / 2, b'A');
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("fits", size), &size, |b, &sz| {
            let mut dst = vec![0u8; sz + 1];
            b.iter(|| {
                dst[..prefix.len()].copy_from_slice(&prefix);
                black_box(strlcat(&mut dst, black_box(&src), sz + 1))
            });
        });

        // Size below the existing prefix: no scan of dest past `size`.
        group.bench_with_input(BenchmarkId::new("saturated", size), &size, |b, &sz| {
            let mut dst = prefix.clone();
            b.iter(|| black_box(strlcat(&mut dst, black_box(&src), sz / 4)));
        });
    }
    group.finish();
}

fn bench_strlen(c: &mut Criterion) {
    let mut group = c.benchmark_group("strlen");

    for &size in SIZES {
        let s = nul_terminated(size, b'A');
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("libcheck_core", size), &size, |b, _| {
            b.iter(|| black_box(strlen(black_box(&s))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strlcpy, bench_strlcat, bench_strlen);
criterion_main!(benches);
