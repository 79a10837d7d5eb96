//! Core data types for the knapsack GA.
//!
//! - [`Knapsack`]: the item set (index-aligned weights and values) and capacity
//! - [`Individual`]: a fixed-length inclusion vector, one gene per item
//! - [`GenerationRecord`] / [`RunResult`]: what a run reports

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use thiserror::Error;

/// Errors raised when building a [`Knapsack`] instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// `weights` and `values` are not index-aligned.
    #[error("weights and values must have the same length (got {weights} weights, {values} values)")]
    LengthMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of values supplied.
        values: usize,
    },
}

/// A 0/1 knapsack instance.
///
/// Item `i` has weight `weights[i]` and value `values[i]`. Weights and
/// values may be negative; the capacity may not. The lengths are
/// checked once on construction and never change afterwards, so every
/// stage of a run can index both slices with the same gene position.
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Knapsack;
///
/// let ks = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// assert_eq!(ks.len(), 3);
/// assert!(Knapsack::new(vec![1], vec![1, 2], 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    weights: Vec<i64>,
    values: Vec<i64>,
    capacity: u64,
}

impl Knapsack {
    /// Creates an instance, rejecting mismatched item lists.
    pub fn new(weights: Vec<i64>, values: Vec<i64>, capacity: u64) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Number of items (`n`), which is also the genome length.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Item weights, indexed like the genes of an [`Individual`].
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Item values, indexed like the genes of an [`Individual`].
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Upper bound on the total weight of a feasible selection.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}

/// A candidate solution: gene `i` is `true` when item `i` is packed.
///
/// Individuals are values. Operators always build new ones and never
/// resize or edit a parent in place.
///
/// Serializes as a list of `0`/`1` integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: Vec<bool>,
}

impl Individual {
    /// Wraps a gene vector; gene `i` selects item `i`.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// The empty selection over `n` items.
    pub fn zeros(n: usize) -> Self {
        Self {
            genes: vec![false; n],
        }
    }

    /// Builds an individual from `0`/`1` integers; any non-zero value counts as selected.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Genome length, equal to the number of items.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` for the genome of an empty item set.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The inclusion flags, one per item.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Returns `true` if item `index` is packed.
    pub fn is_selected(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Indices of the packed items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }

    /// Genes as `0`/`1` integers.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Individual {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl Serialize for Individual {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.genes.len()))?;
        for &gene in &self.genes {
            seq.serialize_element(&u8::from(gene))?;
        }
        seq.end()
    }
}

/// Best fitness observed in one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRecord {
    /// 1-based generation index.
    #[serde(rename = "generation")]
    pub generation_index: usize,

    /// Highest fitness in that generation's population.
    pub best_value: i128,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// One record per completed generation, in order.
    pub history: Vec<GenerationRecord>,

    /// Best individual of the final population.
    #[serde(rename = "best_solution")]
    pub best_individual: Individual,

    /// Fitness of `best_individual`.
    pub best_value: i128,

    /// Total weight of the items packed by `best_individual`.
    pub best_weight: i128,

    /// Whether the run was stopped before completing every generation.
    #[serde(skip)]
    pub cancelled: bool,
}

impl RunResult {
    /// Number of generations that completed.
    pub fn generations(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knapsack_rejects_mismatched_lengths() {
        let err = Knapsack::new(vec![1, 2, 3], vec![1, 2], 10).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::LengthMismatch {
                weights: 3,
                values: 2
            }
        );
    }

    #[test]
    fn test_empty_knapsack_is_valid() {
        let ks = Knapsack::new(vec![], vec![], 0).unwrap();
        assert!(ks.is_empty());
        assert_eq!(ks.capacity(), 0);
    }

    #[test]
    fn test_individual_bits() {
        let ind = Individual::from_bits(&[1, 0, 1, 1]);
        assert_eq!(ind.len(), 4);
        assert_eq!(ind.to_bits(), vec![1, 0, 1, 1]);
        assert_eq!(ind.selected().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert!(!ind.is_selected(1));
    }

    #[test]
    fn test_individual_serializes_as_integers() {
        let ind = Individual::from_bits(&[0, 1, 1]);
        assert_eq!(serde_json::to_string(&ind).unwrap(), "[0,1,1]");
    }

    #[test]
    fn test_run_result_wire_shape() {
        let result = RunResult {
            history: vec![GenerationRecord {
                generation_index: 1,
                best_value: 7,
            }],
            best_individual: Individual::from_bits(&[1, 1, 0]),
            best_value: 7,
            best_weight: 5,
            cancelled: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "history": [{"generation": 1, "best_value": 7}],
                "best_solution": [1, 1, 0],
                "best_value": 7,
                "best_weight": 5
            })
        );
    }
}
