//! Criterion benchmarks for predicate evaluation and filtering.
//!
//! Inputs are random integers from a seeded RNG so that runs are
//! comparable; the rules are cheap arithmetic tests, so the numbers
//! mostly reflect tree traversal overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_predicate::{Predicate, PredicateFactory};

fn random_values(n: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn divisible_by() -> PredicateFactory<i64, i64> {
    PredicateFactory::new(|d: i64| move |n: &i64| n % d == 0)
}

// ===========================================================================
// Tree shapes
// ===========================================================================

/// Balanced tree alternating intersection and union, `depth` levels deep.
/// Leaves test divisibility by 2..=8 in turn.
fn balanced(depth: usize, factory: &PredicateFactory<i64, i64>, leaf: &mut i64) -> Predicate<i64> {
    if depth == 0 {
        *leaf += 1;
        return factory.call(2 + *leaf % 7).expect("non-zero divisor");
    }
    let left = balanced(depth - 1, factory, leaf);
    let right = balanced(depth - 1, factory, leaf).invert();
    if depth % 2 == 0 {
        left.intersect(&right)
    } else {
        left.union(&right)
    }
}

/// Flat n-ary exclusive union of `width` divisibility tests.
fn wide_xor(width: usize, factory: &PredicateFactory<i64, i64>) -> Predicate<i64> {
    let children = (2..2 + width as i64).filter_map(|d| factory.call(d).ok());
    Predicate::exclusive_union_of(children).expect("width must be positive")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_balanced");
    let factory = divisible_by();
    let values = random_values(1_000);

    for &depth in &[2usize, 6, 10] {
        let tree = balanced(depth, &factory, &mut 0);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| {
                let hits = values.iter().filter(|v| tree.evaluate(v)).count();
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_evaluate_wide_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_wide_xor");
    let factory = divisible_by();
    let values = random_values(1_000);

    for &width in &[4usize, 16, 64] {
        let tree = wide_xor(width, &factory);
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| {
                let hits = values.iter().filter(|v| tree.evaluate(v)).count();
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    let factory = divisible_by();
    let tree = balanced(6, &factory, &mut 0);

    for &n in &[1_000usize, 10_000, 100_000] {
        let values = random_values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let kept: usize = tree.filtered(black_box(values)).count();
                black_box(kept)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate_balanced,
    bench_evaluate_wide_xor,
    bench_filtered
);
criterion_main!(benches);
