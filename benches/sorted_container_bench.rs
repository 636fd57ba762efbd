//! SortedContainer benchmarks.
//!
//! Compares bulk construction against incremental `add`, and measures
//! membership and value-range queries at several sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sorted_container::container::SortedContainer;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Interleaves low and high values so insertion is not append-only.
fn generate_shuffled_vec(size: i32) -> Vec<i32> {
    (0..size)
        .map(|index| if index % 2 == 0 { index } else { size - index })
        .collect()
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_container_construction");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        group.bench_with_input(BenchmarkId::new("from_values", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(SortedContainer::from_values(black_box(elements))),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("add_each", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    let mut container = SortedContainer::new();
                    for element in elements {
                        container.add(black_box(element));
                    }
                    black_box(container)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_container_contains");

    for size in SIZES {
        let container = SortedContainer::from_values(0..size);
        group.bench_with_input(BenchmarkId::new("contains", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for value in (0..size).step_by(7) {
                    black_box(container.contains(black_box(value)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_ranges(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_container_ranges");

    for size in SIZES {
        let container = SortedContainer::from_values(0..size);
        let (lower, upper) = (size / 4, size / 2);
        group.bench_with_input(BenchmarkId::new("get_between", size), &size, |bencher, _| {
            bencher.iter(|| black_box(container.get_between(lower, upper, false)));
        });
        group.bench_with_input(BenchmarkId::new("remove_between", size), &size, |bencher, _| {
            bencher.iter_batched(
                || container.clone(),
                |mut container| black_box(container.remove_between(lower, upper, true)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_ranges
);
criterion_main!(benches);
