//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::breeding_pool_size;
use thiserror::Error;

/// Reasons a [`GaConfig`] is rejected by [`GaConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Recombination needs at least two individuals.
    #[error("population_size must be at least 2 (got {0})")]
    PopulationTooSmall(usize),

    #[error("generation_count must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must be within [0, 1] (got {0})")]
    MutationRateOutOfRange(f64),
}

/// Configuration for the knapsack Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_count, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generation_count(20)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in every generation (`P`).
    pub population_size: usize,

    /// Exact number of generations to run (`G`). There is no early stop.
    pub generation_count: usize,

    /// Independent per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed for every run.
    pub seed: Option<u64>,

    /// Whether to score populations in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Delay between generations in streaming mode, in milliseconds.
    pub pace_ms: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generation_count: 100,
            mutation_rate: 0.01,
            seed: None,
            parallel: false,
            pace_ms: 1000,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the streaming delay between generations.
    pub fn with_pace_ms(mut self, ms: u64) -> Self {
        self.pace_ms = ms;
        self
    }

    /// Size of the breeding pool kept by selection: `max(2, P / 2)`,
    /// never more than `P`.
    pub fn breeding_pool_size(&self) -> usize {
        breeding_pool_size(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generation_count == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generation_count, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert_eq!(config.pace_ms, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generation_count(25)
            .with_mutation_rate(0.2)
            .with_seed(42)
            .with_parallel(true)
            .with_pace_ms(0);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.generation_count, 25);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
        assert_eq!(config.pace_ms, 0);
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_generation_count(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_mutation_rate_bypassing_builder() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MutationRateOutOfRange(_))
        ));

        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_breeding_pool_size_floor() {
        let size = |p| GaConfig::default().with_population_size(p).breeding_pool_size();
        assert_eq!(size(2), 2);
        assert_eq!(size(3), 2);
        assert_eq!(size(4), 2);
        assert_eq!(size(5), 2);
        assert_eq!(size(10), 5);
        assert_eq!(size(101), 50);
    }
}
