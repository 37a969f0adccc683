//! Simulation Driver
//!
//! Orchestrates one full run for a strategy: construct a fresh learner, then
//! per session select words, review them, and measure recall across the whole
//! vocabulary. The per-session recall fraction is the run's only output.
//!
//! Session procedure, repeated `sessions` times in strict order:
//! 1. Snapshot the memory state and select `reviews_per_session` words
//! 2. Review each selected word, in selection order
//! 3. Recall-check every vocabulary word and record the success fraction
//!
//! Preconditions are validated before the first session; any violation aborts
//! the run with no partial output. Runs for different strategies share no
//! state and draw from independent generators, so the comparison sweep fans
//! them out in parallel.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::learner::{Learner, LearnerError};
use crate::strategy::Strategy;
use crate::types::SimulationConfig;

// ==================== Errors ====================

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("vocabulary must not be empty")]
    EmptyVocabulary,
    #[error("reviews per session ({requested}) exceeds vocabulary size ({vocabulary_size})")]
    ReviewBatchTooLarge {
        requested: usize,
        vocabulary_size: usize,
    },
    #[error(transparent)]
    Learner(#[from] LearnerError),
}

// ==================== Data Structures ====================

/// One strategy's completed run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrategyRun {
    pub strategy: Strategy,
    /// Recall fraction per session, each in [0, 1]
    pub history: Vec<f64>,
}

// ==================== Simulation ====================

/// Driver for recall-rate simulation runs over a fixed vocabulary.
///
/// Owns the pseudo-random generator for the run; each call to [`run`]
/// constructs its own [`Learner`], so consecutive runs are independent apart
/// from the generator state.
///
/// [`run`]: Simulation::run
pub struct Simulation<R: Rng = ChaCha8Rng> {
    vocabulary: Vec<String>,
    rng: R,
}

impl Simulation<ChaCha8Rng> {
    /// Create a driver seeded from system time (non-reproducible)
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self::with_seed(vocabulary, entropy_seed())
    }

    /// Create a driver with a specific seed (reproducible runs)
    pub fn with_seed(vocabulary: Vec<String>, seed: u64) -> Self {
        Self {
            vocabulary,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a driver with an injected generator
    pub fn with_rng(vocabulary: Vec<String>, rng: R) -> Self {
        Self { vocabulary, rng }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Run one full simulation for a strategy.
    ///
    /// Returns the recall history: one fraction per session, length exactly
    /// `config.sessions`, every value in [0, 1].
    pub fn run(
        &mut self,
        strategy: Strategy,
        config: &SimulationConfig,
    ) -> Result<Vec<f64>, SimulationError> {
        self.validate(config)?;

        let mut learner = Learner::new(&self.vocabulary);
        let mut history = Vec::with_capacity(config.sessions);

        for session in 0..config.sessions {
            // Selection reads a snapshot taken before this session's reviews
            // mutate the memory state.
            let strengths = learner.strength_profile(&self.vocabulary)?;
            let selected =
                strategy.select_words(&strengths, config.reviews_per_session, &mut self.rng);

            for index in selected {
                learner.review(&self.vocabulary[index], strategy, &mut self.rng)?;
            }

            let mut recalled = 0usize;
            for word in &self.vocabulary {
                if learner.recall(word, &mut self.rng)? {
                    recalled += 1;
                }
            }
            let rate = recalled as f64 / self.vocabulary.len() as f64;
            debug!(
                strategy = strategy.as_str(),
                session,
                recall_rate = rate,
                "session complete"
            );
            history.push(rate);
        }

        Ok(history)
    }

    fn validate(&self, config: &SimulationConfig) -> Result<(), SimulationError> {
        if self.vocabulary.is_empty() {
            return Err(SimulationError::EmptyVocabulary);
        }
        // All strategies draw their review batch from the vocabulary without
        // replacement, so the batch can never be larger than the vocabulary.
        if config.reviews_per_session > self.vocabulary.len() {
            return Err(SimulationError::ReviewBatchTooLarge {
                requested: config.reviews_per_session,
                vocabulary_size: self.vocabulary.len(),
            });
        }
        Ok(())
    }
}

// ==================== Comparison Sweep ====================

/// Run every strategy once over the same vocabulary, in parallel.
///
/// Each strategy gets its own independently seeded driver; results come back
/// in input order. The first failing run aborts the sweep.
pub fn compare(
    vocabulary: &[String],
    strategies: &[Strategy],
    config: &SimulationConfig,
) -> Result<Vec<StrategyRun>, SimulationError> {
    strategies
        .par_iter()
        .map(|&strategy| {
            let mut sim = Simulation::new(vocabulary.to_vec());
            sim.run(strategy, config)
                .map(|history| StrategyRun { strategy, history })
        })
        .collect()
}

/// Reproducible variant of [`compare`]: per-strategy seeds are derived from
/// `seed` by position.
pub fn compare_seeded(
    vocabulary: &[String],
    strategies: &[Strategy],
    config: &SimulationConfig,
    seed: u64,
) -> Result<Vec<StrategyRun>, SimulationError> {
    strategies
        .par_iter()
        .enumerate()
        .map(|(position, &strategy)| {
            let mut sim =
                Simulation::with_seed(vocabulary.to_vec(), seed.wrapping_add(position as u64));
            sim.run(strategy, config)
                .map(|history| StrategyRun { strategy, history })
        })
        .collect()
}

/// Default seed when none is supplied: system time, falling back to a fixed
/// value if the clock is unavailable.
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

// ==================== Tests ====================
