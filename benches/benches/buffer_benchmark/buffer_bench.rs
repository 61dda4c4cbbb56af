use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dublon::{DomainBitmap, IntBuffer};

fn bench_append_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_growth");

    for size in [100usize, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut buffer = IntBuffer::new();
                for i in 0..size {
                    buffer.append(i as i64).unwrap();
                }
                black_box(buffer.len());
            });
        });
    }

    group.finish();
}

fn bench_append_presized_vs_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_presized");
    let size = 10_000usize;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("growing", |b| {
        b.iter(|| {
            let mut buffer = IntBuffer::new();
            for i in 0..size {
                buffer.append(i as i64).unwrap();
            }
            black_box(buffer.capacity());
        });
    });

    group.bench_function("with_capacity", |b| {
        b.iter(|| {
            let mut buffer = IntBuffer::with_capacity(size);
            for i in 0..size {
                buffer.append(i as i64).unwrap();
            }
            black_box(buffer.capacity());
        });
    });

    // Базовая линия: чистый Vec с той же нагрузкой
    group.bench_function("vec_push_baseline", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..size {
                vec.push(i as i64);
            }
            black_box(vec.len());
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let buffer = IntBuffer::from_vec((0..10_000).collect());
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("iter_sum", |b| {
        b.iter(|| {
            let sum: i64 = buffer.iter().sum();
            black_box(sum);
        });
    });

    group.bench_function("as_slice_sum", |b| {
        b.iter(|| {
            let sum: i64 = buffer.as_slice().iter().sum();
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_domain_bitmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_bitmap");
    let bound = 100_000i64;

    group.bench_function("insert_full_domain", |b| {
        b.iter(|| {
            let mut bitmap = DomainBitmap::with_bound(bound);
            for value in 0..bound {
                bitmap.insert(value);
            }
            black_box(bitmap.count());
        });
    });

    let mut half = DomainBitmap::with_bound(bound);
    for value in (0..bound).step_by(2) {
        half.insert(value);
    }

    group.bench_function("contains_hit_and_miss", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for value in 0..bound {
                if half.contains(value) {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });

    group.bench_function("complement", |b| {
        b.iter(|| {
            let free = !&half;
            black_box(free.count());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_append_growth,
    bench_append_presized_vs_growing,
    bench_scan,
    bench_domain_bitmap,
);

criterion_main!(benches);
