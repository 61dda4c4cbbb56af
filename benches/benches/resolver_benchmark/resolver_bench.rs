use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use dublon::{DuplicateCounter, DuplicateResolver, IntBuffer};

/// Буфер из `len` равномерных значений домена `[0, bound)`.
fn uniform_buffer(
    bound: i64,
    len: usize,
    seed: u64,
) -> IntBuffer {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut buffer = IntBuffer::with_capacity(len);
    for _ in 0..len {
        buffer.append(rng.gen_range(0..bound)).unwrap();
    }
    buffer
}

fn bench_count_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_duplicates");

    for size in [1_000, 10_000, 100_000].iter() {
        let buffer = uniform_buffer(*size as i64, *size, 7);
        let counter = DuplicateCounter::new(*size as i64);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let report = counter.count(&buffer).unwrap();
                black_box(report.duplicates);
            });
        });
    }

    group.finish();
}

fn bench_resolve_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_scaling");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000, 100_000].iter() {
        let buffer = uniform_buffer(*size as i64, *size, 11);
        let resolver = DuplicateResolver::new(*size as i64);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || buffer.clone(),
                |mut buf| {
                    let outcome = resolver.resolve(&mut buf).unwrap();
                    black_box(outcome.relocated);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve_densities(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_density");
    let bound = 10_000i64;
    let resolver = DuplicateResolver::new(bound);

    // Доля занятого домена определяет длину пробных зондов
    for (label, len) in [
        ("sparse_10pct", 1_000usize),
        ("half_50pct", 5_000usize),
        ("full_100pct", 10_000usize),
    ] {
        let buffer = uniform_buffer(bound, len, 13);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(label, |b| {
            b.iter_batched(
                || buffer.clone(),
                |mut buf| {
                    let outcome = resolver.resolve(&mut buf).unwrap();
                    black_box(outcome.relocated);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_worst_case");
    group.measurement_time(Duration::from_secs(10));

    let bound = 10_000i64;
    let resolver = DuplicateResolver::new(bound);

    // Все значения одинаковы: зонды расходятся через весь домен
    let identical = IntBuffer::from_vec(vec![bound / 2; bound as usize]);
    group.bench_function("all_identical", |b| {
        b.iter_batched(
            || identical.clone(),
            |mut buf| {
                let outcome = resolver.resolve(&mut buf).unwrap();
                black_box(outcome.relocated);
            },
            BatchSize::LargeInput,
        );
    });

    // Уже различный буфер: разрешение сводится к одному скану
    let distinct = IntBuffer::from_vec((0..bound).collect());
    group.bench_function("already_distinct", |b| {
        b.iter_batched(
            || distinct.clone(),
            |mut buf| {
                let outcome = resolver.resolve(&mut buf).unwrap();
                black_box(outcome.relocated);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_count_scaling,
    bench_resolve_scaling,
    bench_resolve_densities,
    bench_resolve_worst_case,
);

criterion_main!(benches);
