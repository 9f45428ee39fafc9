//! Criterion micro-benchmarks for push, insert, drain and scripted churn,
//! comparing fixed-step against doubling growth.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dynarr_bench::{filled, policy_profiles};
use dynarr_store::DynamicArray;
use dynarr_test_utils::OpScript;

/// Benchmark: push 10K elements into an array at its initial capacity.
fn bench_push_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_10k");
    for (name, policy) in policy_profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, &policy| {
            b.iter(|| black_box(filled(policy, 10_000)));
        });
    }
    group.finish();
}

/// Benchmark: insert 1K elements at the front (worst-case shifting).
fn bench_insert_front_1k(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front_1k");
    for (name, policy) in policy_profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, &policy| {
            b.iter(|| {
                let mut array = filled(policy, 0);
                for v in 0..1_000u64 {
                    array.insert(0, v).unwrap();
                }
                black_box(array.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: pop a 10K-element array empty, shrinking along the way.
fn bench_drain_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_10k");
    for (name, policy) in policy_profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, &policy| {
            b.iter_batched(
                || filled(policy, 10_000),
                |mut array| {
                    while array.pop_back().is_some() {}
                    black_box(array.capacity());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

/// Benchmark: replay a 5K-op seeded script of mixed operations.
fn bench_scripted_churn(c: &mut Criterion) {
    let script = OpScript::generate(42, 5_000, 256);
    let mut group = c.benchmark_group("scripted_churn_5k");
    for (name, policy) in policy_profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &policy, |b, &policy| {
            b.iter(|| {
                let mut array: DynamicArray<i64> = DynamicArray::with_policy(policy).unwrap();
                for op in script.ops() {
                    let _ = op.apply(&mut array);
                }
                black_box(array.metrics().reallocations());
            });
        });
    }
    group.finish();
}

/// Benchmark: min/max scan over 10K elements.
fn bench_extremes_10k(c: &mut Criterion) {
    let (_, policy) = policy_profiles()[0];
    let array = filled(policy, 10_000);
    c.bench_function("extremes_10k", |b| {
        b.iter(|| {
            black_box(array.min().unwrap());
            black_box(array.max().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_insert_front_1k,
    bench_drain_10k,
    bench_scripted_churn,
    bench_extremes_10k
);
criterion_main!(benches);
