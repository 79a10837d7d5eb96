//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Searches for a high-value subset of items whose total weight stays within
//! a capacity, using a population of binary inclusion vectors evolved by
//! truncation selection, single-point crossover and bit-flip mutation.
//!
//! Two delivery modes share the same generation loop:
//!
//! - **Batch**: [`ga::GaRunner::run`] returns one [`ga::RunResult`] after all
//!   generations.
//! - **Streaming**: [`progress::stream_run`] pushes one event per generation
//!   to a consumer, then a terminal event, and stops early if the consumer
//!   disconnects.
//!
//! Requests arriving as JSON are validated by [`request::KnapsackRequest`]
//! before a run is built.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner, Knapsack};
//!
//! let knapsack = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generation_count(20)
//!     .with_mutation_rate(0.05)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&knapsack, &config).unwrap();
//! assert!(result.best_value <= 7);
//! assert_eq!(result.history.len(), 20);
//! ```

pub mod ga;
pub mod progress;
pub mod request;
