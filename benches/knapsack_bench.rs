//! Criterion benchmarks for the knapsack GA.
//!
//! Uses seeded random instances so every sample measures the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::operators::{flip_mutation, random_population, single_point_crossover};
use knapsack_ga::ga::{score_population, GaConfig, GaRunner, Knapsack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_instance(n: usize, seed: u64) -> Knapsack {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<i64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let values: Vec<i64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let capacity = weights.iter().sum::<i64>().unsigned_abs() / 2;
    Knapsack::new(weights, values, capacity).expect("weights and values are aligned")
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(20);

    for n in [20, 100, 500] {
        let knapsack = random_instance(n, 42);
        let config = GaConfig::default()
            .with_population_size(100)
            .with_generation_count(50)
            .with_mutation_rate(1.0 / n as f64)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| GaRunner::run(black_box(&knapsack), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let knapsack = random_instance(500, 7);
    let mut rng = StdRng::seed_from_u64(7);
    let population = random_population(knapsack.len(), 200, &mut rng);

    c.bench_function("score_population/500x200", |b| {
        b.iter(|| score_population(black_box(&knapsack), black_box(&population), false))
    });
}

fn bench_operators(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let parents = random_population(1000, 2, &mut rng);

    c.bench_function("single_point_crossover/1000", |b| {
        b.iter(|| single_point_crossover(black_box(&parents[0]), black_box(&parents[1]), &mut rng))
    });

    c.bench_function("flip_mutation/1000", |b| {
        b.iter(|| flip_mutation(black_box(&parents[0]), 0.01, &mut rng))
    });
}

criterion_group!(benches, bench_ga_run, bench_scoring, bench_operators);
criterion_main!(benches);
