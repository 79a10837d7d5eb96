//! GA evolutionary loop execution.
//!
//! [`EvolutionRun`] owns one run's population, randomness source and
//! history, and advances one generation per [`step`](EvolutionRun::step):
//! selection → crossover → mutation → evaluation.
//!
//! [`GaRunner`] drives a run to completion in batch mode.

use super::config::{ConfigError, GaConfig};
use super::fitness::score_population;
use super::operators::{flip_mutation, random_population, single_point_crossover};
use super::selection::{best_index, select_scored};
use super::types::{GenerationRecord, Individual, Knapsack, RunResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle of an [`EvolutionRun`].
///
/// `Initializing → Running → Completed`, or `Running → Cancelled` at a
/// generation boundary. Neither `Completed` nor `Cancelled` is ever left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No population exists yet.
    Initializing,
    /// `generation` is the next generation to compute (1-based).
    Running { generation: usize },
    /// All generations were computed.
    Completed,
    /// Stopped early by the caller.
    Cancelled,
}

/// A single GA run over one knapsack instance.
///
/// Each run exclusively owns its population and its random number
/// generator, so any number of runs can execute concurrently without
/// interfering.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{EvolutionRun, GaConfig, Knapsack};
///
/// let ks = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_generation_count(5)
///     .with_seed(42);
///
/// let mut run = EvolutionRun::new(ks, config).unwrap();
/// while let Some(record) = run.step() {
///     assert!(record.best_value <= 7);
/// }
/// let result = run.finish();
/// assert_eq!(result.history.len(), 5);
/// ```
#[derive(Debug)]
pub struct EvolutionRun<R: Rng = StdRng> {
    knapsack: Knapsack,
    config: GaConfig,
    rng: R,
    population: Vec<Individual>,
    scores: Vec<i128>,
    history: Vec<GenerationRecord>,
    state: RunState,
}

impl EvolutionRun<StdRng> {
    /// Creates a run seeded from `config.seed`, or from a fresh random seed.
    pub fn new(knapsack: Knapsack, config: GaConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(knapsack, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EvolutionRun<R> {
    /// Creates a run that draws all randomness from `rng`.
    pub fn with_rng(knapsack: Knapsack, config: GaConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            history: Vec::with_capacity(config.generation_count),
            knapsack,
            config,
            rng,
            population: Vec::new(),
            scores: Vec::new(),
            state: RunState::Initializing,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns `true` once the run is `Completed` or `Cancelled`.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, RunState::Completed | RunState::Cancelled)
    }

    /// Number of generations completed so far.
    pub fn generations_completed(&self) -> usize {
        self.history.len()
    }

    /// Records of the completed generations, oldest first.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// The current population (empty before the first step).
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The instance being optimized.
    pub fn knapsack(&self) -> &Knapsack {
        &self.knapsack
    }

    /// The validated configuration of this run.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Computes the next generation and returns its record.
    ///
    /// Returns `None` once the run is completed or cancelled.
    pub fn step(&mut self) -> Option<GenerationRecord> {
        match self.state {
            RunState::Completed | RunState::Cancelled => return None,
            RunState::Initializing => self.initialize(),
            RunState::Running { .. } => {}
        }

        let generation = self.history.len() + 1;
        let pool = select_scored(
            &self.population,
            &self.scores,
            self.config.breeding_pool_size(),
        );
        let next = self.breed(&pool);

        self.scores = score_population(&self.knapsack, &next, self.config.parallel);
        self.population = next;

        let best_value = best_index(&self.scores).map_or(0, |i| self.scores[i]);
        let record = GenerationRecord {
            generation_index: generation,
            best_value,
        };
        self.history.push(record);
        debug!(generation, best_value, "generation complete");

        self.state = if generation >= self.config.generation_count {
            RunState::Completed
        } else {
            RunState::Running {
                generation: generation + 1,
            }
        };
        Some(record)
    }

    /// Stops the run at the current generation boundary.
    ///
    /// Has no effect on a run that already finished.
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            info!(
                generations_completed = self.history.len(),
                "knapsack GA run cancelled"
            );
            self.state = RunState::Cancelled;
        }
    }

    /// Steps until the run completes or is cancelled.
    pub fn run_to_end(&mut self) {
        while self.step().is_some() {}
    }

    /// Consumes the run and reports the best individual of the final population.
    ///
    /// A run cancelled before its first generation reports the empty
    /// selection with value 0.
    pub fn finish(self) -> RunResult {
        let (best_individual, best_value) = match best_index(&self.scores) {
            Some(i) => (self.population[i].clone(), self.scores[i]),
            None => (Individual::zeros(self.knapsack.len()), 0),
        };
        let best_weight = self.knapsack.total_weight(&best_individual);
        let cancelled = self.state == RunState::Cancelled;

        info!(
            generations = self.history.len(),
            best_value, best_weight, cancelled, "knapsack GA run finished"
        );

        RunResult {
            history: self.history,
            best_individual,
            best_value,
            best_weight,
            cancelled,
        }
    }

    fn initialize(&mut self) {
        info!(
            items = self.knapsack.len(),
            capacity = self.knapsack.capacity(),
            population_size = self.config.population_size,
            generations = self.config.generation_count,
            mutation_rate = self.config.mutation_rate,
            "starting knapsack GA run"
        );
        self.population = random_population(
            self.knapsack.len(),
            self.config.population_size,
            &mut self.rng,
        );
        self.scores = score_population(&self.knapsack, &self.population, self.config.parallel);
        self.state = RunState::Running { generation: 1 };
    }

    /// Fills a new generation from `pool`, two children per drawn pair.
    fn breed(&mut self, pool: &[Individual]) -> Vec<Individual> {
        let size = self.config.population_size;
        let rate = self.config.mutation_rate;
        let mut next = Vec::with_capacity(size + 1);

        while next.len() < size {
            let (p1, p2) = pick_parents(pool, &mut self.rng);
            let (c1, c2) = single_point_crossover(p1, p2, &mut self.rng);
            next.push(flip_mutation(&c1, rate, &mut self.rng));
            next.push(flip_mutation(&c2, rate, &mut self.rng));
        }

        // An odd population size overshoots by one.
        next.truncate(size);
        next
    }
}

/// Draws two distinct members of `pool`, uniformly.
///
/// Every call samples from the whole pool, so the same pair may recur.
/// A single-member pool pairs that member with itself.
fn pick_parents<'a, R: Rng>(pool: &'a [Individual], rng: &mut R) -> (&'a Individual, &'a Individual) {
    let n = pool.len();
    if n < 2 {
        return (&pool[0], &pool[0]);
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (&pool[i], &pool[j])
}

/// Executes the GA loop in batch mode.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner, Knapsack};
///
/// let ks = Knapsack::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// let config = GaConfig::default().with_generation_count(10).with_seed(1);
/// let result = GaRunner::run(&ks, &config).unwrap();
/// assert_eq!(result.generations(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs all generations and returns the final result.
    pub fn run(knapsack: &Knapsack, config: &GaConfig) -> Result<RunResult, ConfigError> {
        Self::run_with_cancel(knapsack, config, None)
    }

    /// Runs the GA with an optional cancellation flag.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops at
    /// the next generation boundary and reports the best individual of the
    /// last completed generation.
    pub fn run_with_cancel(
        knapsack: &Knapsack,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult, ConfigError> {
        let mut run = EvolutionRun::new(knapsack.clone(), config.clone())?;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    run.cancel();
                }
            }
            if run.step().is_none() {
                break;
            }
        }

        Ok(run.finish())
    }
}

// ============================================================================
// Tests
// ============================================================================
