//! Benchmark for Optional combinator chains vs bare Option handling.
//!
//! Measures the overhead of the presence-rule container against the
//! standard library's Option for the common lookup-transform-default
//! pattern.

use criterion::{Criterion, criterion_group, criterion_main};
use optionals::maps::OptionalMap;
use optionals::optional::Optional;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// Combinator chain Benchmark
// =============================================================================

fn benchmark_combinator_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinator_chain");

    group.bench_function("Optional", |bencher| {
        bencher.iter(|| {
            let value = Optional::of(black_box(21))
                .map(|n| n * 2)
                .filter(|n| *n > 10)
                .or_else(0);
            black_box(value)
        });
    });

    group.bench_function("Option", |bencher| {
        bencher.iter(|| {
            let value = Some(black_box(21))
                .map(|n| n * 2)
                .filter(|n| *n > 10)
                .unwrap_or(0);
            black_box(value)
        });
    });

    group.finish();
}

// =============================================================================
// Map lookup Benchmark
// =============================================================================

fn benchmark_map_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_lookup");

    let mut map: HashMap<u64, Option<u64>> = HashMap::new();
    for index in 0..1_000 {
        map.insert(index, (index % 3 != 0).then_some(index * 2));
    }

    group.bench_function("get_optional", |bencher| {
        bencher.iter(|| {
            let mut total = 0;
            for index in 0..1_000 {
                total += map
                    .get_optional(&black_box(index))
                    .map(|stored| stored.unwrap_or(0))
                    .or_else(0);
            }
            black_box(total)
        });
    });

    group.bench_function("std_get", |bencher| {
        bencher.iter(|| {
            let mut total = 0;
            for index in 0..1_000 {
                total += map
                    .get(&black_box(index))
                    .and_then(|stored| *stored)
                    .unwrap_or(0);
            }
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_combinator_chain, benchmark_map_lookup);
criterion_main!(benches);
