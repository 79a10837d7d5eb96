//! Binary-string genetic operators.
//!
//! Initialization, crossover and mutation for [`Individual`] inclusion
//! vectors. Every operator returns new individuals; parents are never
//! modified and genome length is always preserved.
//!
//! # Operators
//!
//! - [`random_individual`] / [`random_population`]: uniform Bernoulli(0.5) genes
//! - [`single_point_crossover`]: splice two parents at one interior cut
//! - [`flip_mutation`]: independent per-gene bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Individual;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates an individual of length `n` with each gene set with probability 0.5.
pub fn random_individual<R: Rng>(n: usize, rng: &mut R) -> Individual {
    Individual::new((0..n).map(|_| rng.random_bool(0.5)).collect())
}

/// Creates exactly `size` random individuals of length `n`.
pub fn random_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| random_individual(n, rng)).collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// # Algorithm
///
/// 1. Draw a cut `c` uniformly from `[1, n - 1]`
/// 2. `child1 = parent1[..c] ++ parent2[c..]`
/// 3. `child2 = parent2[..c] ++ parent1[c..]`
///
/// With `n < 2` there is no interior cut and the parents are returned unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.random_range(1..n);
    (
        splice(parent1, parent2, cut),
        splice(parent2, parent1, cut),
    )
}

fn splice(head: &Individual, tail: &Individual, cut: usize) -> Individual {
    let mut genes = Vec::with_capacity(head.len());
    genes.extend_from_slice(&head.genes()[..cut]);
    genes.extend_from_slice(&tail.genes()[cut..]);
    Individual::new(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation.
///
/// Each gene is flipped independently with probability `rate`. A rate of
/// `0.0` returns an identical copy and `1.0` returns the complement.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn flip_mutation<R: Rng>(individual: &Individual, rate: f64, rng: &mut R) -> Individual {
    Individual::new(
        individual
            .genes()
            .iter()
            .map(|&gene| if rng.random_bool(rate) { !gene } else { gene })
            .collect(),
    )
}

// ============================================================================
// Tests
// ============================================================================
