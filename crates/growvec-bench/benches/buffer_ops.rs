//! Criterion micro-benchmarks for Buffer allocation and release.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use growvec::Buffer;

/// Benchmark: allocate and default-initialise a 10K-element buffer.
fn bench_buffer_new_default_10k(c: &mut Criterion) {
    c.bench_function("buffer_new_default_10k", |b| {
        b.iter(|| {
            let buf: Buffer<u64> = Buffer::new_default(10_000);
            black_box(buf.len());
        });
    });
}

/// Benchmark: build a 10K-element buffer from a closure, then release it as a box.
fn bench_buffer_from_fn_release_10k(c: &mut Criterion) {
    c.bench_function("buffer_from_fn_release_10k", |b| {
        b.iter(|| {
            let buf = Buffer::from_fn(10_000, |i| i as u64);
            let boxed = buf.into_boxed_slice();
            black_box(boxed[9_999]);
        });
    });
}

criterion_group!(
    benches,
    bench_buffer_new_default_10k,
    bench_buffer_from_fn_release_10k
);
criterion_main!(benches);
