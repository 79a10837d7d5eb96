//! Truncation selection for the GA.
//!
//! The population is ranked by fitness (highest first) and the top
//! `max(2, P / 2)` individuals form the breeding pool. Ranking is stable,
//! so among equal fitness the individual with the lowest population index
//! comes first. [`best_index`] applies the same rule when picking the best
//! of a generation.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use super::fitness::score_population;
use super::types::{Individual, Knapsack};
use std::cmp::Reverse;

/// Breeding pool size for a population of `population_size`.
///
/// At least 2 so recombination always has a pair to draw from, and never
/// larger than the population itself.
pub fn breeding_pool_size(population_size: usize) -> usize {
    (population_size / 2).max(2).min(population_size)
}

/// Population indices ordered by descending fitness, ties by ascending index.
pub fn rank_by_fitness(scores: &[i128]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // sort_by_key is stable
    order.sort_by_key(|&i| Reverse(scores[i]));
    order
}

/// Returns copies of the `pool_size` fittest individuals, best first.
///
/// `scores[i]` must be the fitness of `population[i]`.
pub fn select_scored(population: &[Individual], scores: &[i128], pool_size: usize) -> Vec<Individual> {
    debug_assert_eq!(population.len(), scores.len());
    rank_by_fitness(scores)
        .into_iter()
        .take(pool_size)
        .map(|i| population[i].clone())
        .collect()
}

/// Scores `population` against `knapsack` and keeps the breeding pool.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::{select, Individual, Knapsack};
///
/// let ks = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// let pop = vec![
///     Individual::from_bits(&[0, 0, 1]),
///     Individual::from_bits(&[1, 1, 1]),
///     Individual::from_bits(&[1, 1, 0]),
///     Individual::from_bits(&[1, 0, 0]),
/// ];
/// let pool = select(&pop, &ks);
/// assert_eq!(pool.len(), 2);
/// assert_eq!(ks.score(&pool[0]), 7);
/// assert_eq!(ks.score(&pool[1]), 5);
/// ```
pub fn select(population: &[Individual], knapsack: &Knapsack) -> Vec<Individual> {
    let scores = score_population(knapsack, population, false);
    select_scored(population, &scores, breeding_pool_size(population.len()))
}

/// Index of the fittest individual; the lowest index wins ties.
///
/// Returns `None` for an empty slice.
pub fn best_index(scores: &[i128]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .min_by_key(|&(i, &s)| (Reverse(s), i))
        .map(|(i, _)| i)
}
