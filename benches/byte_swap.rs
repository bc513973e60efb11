//! Criterion benchmarks comparing the native and portable byte swaps and the
//! derived network conversions.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use endianness::{
    hton32,
    hton64,
    swap::{native, portable},
};

const VALUES: usize = 1024;

fn inputs() -> Vec<u64> {
    (0..VALUES as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

fn benchmark_swap(c: &mut Criterion) {
    let values = inputs();
    let mut group = c.benchmark_group("swap/u64");
    group.throughput(Throughput::Elements(VALUES as u64));
    group.bench_function("native", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(0u64, |acc, &v| acc ^ native::swap64(black_box(v)))
        });
    });
    group.bench_function("portable", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(0u64, |acc, &v| acc ^ portable::swap64(black_box(v)))
        });
    });
    group.finish();
}

fn benchmark_network(c: &mut Criterion) {
    let values = inputs();
    let mut group = c.benchmark_group("network");
    group.throughput(Throughput::Elements(VALUES as u64));
    group.bench_function("hton32", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(0u32, |acc, &v| acc ^ hton32(black_box(v as u32)))
        });
    });
    group.bench_function("hton64", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(0u64, |acc, &v| acc ^ hton64(black_box(v)))
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_swap, benchmark_network);
criterion_main!(benches);
