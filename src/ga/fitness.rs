//! Fitness evaluation under a hard capacity constraint.
//!
//! An individual's fitness is the total value of its packed items when
//! their total weight fits the capacity, and `0` otherwise. Infeasible
//! selections get no partial credit.
//!
//! Totals are accumulated in `i128`, which holds the sum of any realistic
//! number of `i64` amounts exactly, so the capacity check never sees a
//! wrapped or clamped weight.

use super::types::{Individual, Knapsack};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Knapsack {
    /// Total weight of the items packed by `individual`.
    pub fn total_weight(&self, individual: &Individual) -> i128 {
        sum_selected(individual, self.weights())
    }

    /// Total value of the items packed by `individual`, ignoring capacity.
    pub fn total_value(&self, individual: &Individual) -> i128 {
        sum_selected(individual, self.values())
    }

    /// Returns `true` if the packed weight fits the capacity.
    pub fn is_feasible(&self, individual: &Individual) -> bool {
        self.total_weight(individual) <= i128::from(self.capacity())
    }

    /// Fitness of `individual`: its total value if feasible, else `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_ga::ga::{Individual, Knapsack};
    ///
    /// let ks = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
    /// assert_eq!(ks.score(&Individual::from_bits(&[1, 1, 0])), 7);
    /// assert_eq!(ks.score(&Individual::from_bits(&[1, 1, 1])), 0);
    /// ```
    pub fn score(&self, individual: &Individual) -> i128 {
        debug_assert_eq!(individual.len(), self.len(), "genome length mismatch");
        if self.is_feasible(individual) {
            self.total_value(individual)
        } else {
            0
        }
    }
}

/// Scores every individual, preserving population order.
///
/// With the `parallel` feature enabled and `parallel = true`, scoring is
/// spread across the rayon thread pool.
pub fn score_population(knapsack: &Knapsack, population: &[Individual], parallel: bool) -> Vec<i128> {
    if parallel {
        score_parallel(knapsack, population)
    } else {
        population.iter().map(|ind| knapsack.score(ind)).collect()
    }
}

#[cfg(feature = "parallel")]
fn score_parallel(knapsack: &Knapsack, population: &[Individual]) -> Vec<i128> {
    population.par_iter().map(|ind| knapsack.score(ind)).collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(knapsack: &Knapsack, population: &[Individual]) -> Vec<i128> {
    population.iter().map(|ind| knapsack.score(ind)).collect()
}

fn sum_selected(individual: &Individual, amounts: &[i64]) -> i128 {
    individual
        .genes()
        .iter()
        .zip(amounts)
        .filter(|&(&gene, _)| gene)
        .map(|(_, &amount)| i128::from(amount))
        .sum()
}
