//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Individuals are binary inclusion vectors over the item set. Fitness is
//! the total packed value, or zero when the capacity is exceeded.
//!
//! # Key Types
//!
//! - [`Knapsack`]: Item weights, item values and capacity
//! - [`Individual`]: A candidate solution, one gene per item
//! - [`GaConfig`]: Algorithm parameters (population size, generations, mutation rate)
//! - [`EvolutionRun`]: A single run, advanced one generation at a time
//! - [`GaRunner`]: Executes a run to completion (batch mode)
//! - [`RunResult`]: Final result with per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Random initialization, single-point crossover, bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional Knapsack Problem"

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use fitness::score_population;
pub use runner::{EvolutionRun, GaRunner, RunState};
pub use selection::{best_index, breeding_pool_size, rank_by_fitness, select, select_scored};
pub use types::{GenerationRecord, Individual, Knapsack, KnapsackError, RunResult};
