//! Optimization requests as received from a client.
//!
//! [`KnapsackRequest`] is the JSON input contract. [`KnapsackRequest::into_parts`]
//! performs all input validation, so the GA core only ever sees
//! well-formed instances and configurations.

use crate::ga::{ConfigError, GaConfig, Knapsack, KnapsackError};
use serde::Deserialize;
use thiserror::Error;

/// Reasons a request is rejected.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not valid JSON for a [`KnapsackRequest`]
    /// (this includes a negative capacity).
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Knapsack(#[from] KnapsackError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A knapsack optimization request.
///
/// ```
/// use knapsack_ga::request::KnapsackRequest;
///
/// let request = KnapsackRequest::from_json(r#"{
///     "weights": [2, 3, 4],
///     "values": [3, 4, 5],
///     "capacity": 5,
///     "population_size": 10,
///     "generation_count": 20,
///     "mutation_rate": 0.05
/// }"#).unwrap();
/// let (knapsack, config) = request.into_parts().unwrap();
/// assert_eq!(knapsack.len(), 3);
/// assert_eq!(config.generation_count, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KnapsackRequest {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    /// Must be non-negative.
    pub capacity: u64,
    pub population_size: usize,
    pub generation_count: usize,
    pub mutation_rate: f64,
    /// Optional seed for a reproducible run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl KnapsackRequest {
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Validates the request and splits it into an instance and a configuration.
    ///
    /// The mutation rate is checked, not clamped: an out-of-range value is
    /// an error.
    pub fn into_parts(self) -> Result<(Knapsack, GaConfig), RequestError> {
        let knapsack = Knapsack::new(self.weights, self.values, self.capacity)?;
        let config = GaConfig {
            population_size: self.population_size,
            generation_count: self.generation_count,
            mutation_rate: self.mutation_rate,
            seed: self.seed,
            ..GaConfig::default()
        };
        config.validate()?;
        Ok((knapsack, config))
    }
}
