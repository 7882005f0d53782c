use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice_sums::summatory::summatory::upper_columns;
use lattice_sums::{compute, reference, Target};

fn bench_divisor_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisor_count");

    for exp in [9u32, 12, 15, 18] {
        let n = 10i64.pow(exp);
        group.bench_with_input(BenchmarkId::from_parameter(exp), &n, |b, &n| {
            b.iter(|| compute(Target::DivisorCount, n));
        });
    }

    group.finish();
}

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference");
    group.sample_size(10);

    for exp in [9u32, 12] {
        let n = 10i64.pow(exp);
        group.bench_with_input(BenchmarkId::from_parameter(exp), &n, |b, &n| {
            b.iter(|| reference(Target::DivisorCount, n));
        });
    }

    group.finish();
}

fn bench_upper_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("upper_columns");
    let mut rng = rand::thread_rng();

    for _ in 0..3 {
        let n: i64 = rand::Rng::gen_range(&mut rng, 1_000_000_000_000..1_000_000_000_000_000);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| upper_columns(n));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_divisor_count, bench_reference, bench_upper_columns);
criterion_main!(benches);
