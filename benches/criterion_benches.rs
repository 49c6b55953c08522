//! Criterion benchmarks for the scalar kernels
//!
//! Measures wall-clock time per call against libm's portable reference.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Root engine: sqrt, inv_sqrt, hypot
fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");

    group.bench_function("sqrt", |b| b.iter(|| black_box(detmath::sqrt(black_box(42.7)))));
    group.bench_function("sqrt_libm", |b| {
        b.iter(|| black_box(libm::sqrtf(black_box(42.7))))
    });
    group.bench_function("inv_sqrt", |b| {
        b.iter(|| black_box(detmath::inv_sqrt(black_box(42.7))))
    });
    group.bench_function("hypot", |b| {
        b.iter(|| black_box(detmath::hypot(black_box(3.0), black_box(4.0))))
    });
    group.bench_function("hypot_libm", |b| {
        b.iter(|| black_box(libm::hypotf(black_box(3.0), black_box(4.0))))
    });

    group.finish();
}

/// Log/Exp engine
fn bench_exp_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp_log");

    group.bench_function("exp", |b| b.iter(|| black_box(detmath::exp(black_box(-5.3)))));
    group.bench_function("exp_libm", |b| {
        b.iter(|| black_box(libm::expf(black_box(-5.3))))
    });
    group.bench_function("log", |b| b.iter(|| black_box(detmath::log(black_box(1000.0)))));
    group.bench_function("log_libm", |b| {
        b.iter(|| black_box(libm::logf(black_box(1000.0))))
    });
    group.bench_function("pow", |b| {
        b.iter(|| black_box(detmath::pow(black_box(2.0), black_box(3.5))))
    });

    group.finish();
}

/// Trigonometric engine
fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");

    group.bench_function("sin", |b| b.iter(|| black_box(detmath::sin(black_box(2.4)))));
    group.bench_function("sin_libm", |b| {
        b.iter(|| black_box(libm::sinf(black_box(2.4))))
    });
    group.bench_function("tan", |b| b.iter(|| black_box(detmath::tan(black_box(0.7)))));
    group.bench_function("atan2", |b| {
        b.iter(|| black_box(detmath::atan2(black_box(1.0), black_box(-2.0))))
    });
    group.bench_function("atan2_libm", |b| {
        b.iter(|| black_box(libm::atan2f(black_box(1.0), black_box(-2.0))))
    });

    group.finish();
}

/// Rounding kernel
fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");

    group.bench_function("floor", |b| {
        b.iter(|| black_box(detmath::floor(black_box(-2.7))))
    });
    group.bench_function("round", |b| {
        b.iter(|| black_box(detmath::round(black_box(2.5))))
    });
    group.bench_function("modulo", |b| {
        b.iter(|| black_box(detmath::modulo(black_box(-7.3), black_box(3.0))))
    });

    group.finish();
}

criterion_group!(benches, bench_roots, bench_exp_log, bench_trig, bench_rounding);
criterion_main!(benches);
