//! Synthetic Learner Memory Model
//!
//! The learner holds one memory strength per vocabulary word, a scalar in
//! [0, 1] that doubles as the word's recall probability:
//!
//! - **review** mutates a word's strength through the active strategy's
//!   update rule, clamped to the [0, 1] range
//! - **recall** is a single Bernoulli trial: draw R ~ Uniform[0, 1) and
//!   succeed iff R < strength; memory is never mutated by a recall check
//!
//! All randomness enters through an injected generator handle, so seeded
//! runs are fully reproducible.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::strategy::Strategy;
use crate::types::{MAX_STRENGTH, MIN_STRENGTH};

// ==================== Errors ====================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LearnerError {
    #[error("unknown word: {0}")]
    UnknownWord(String),
}

// ==================== Data Structures ====================

/// One word's strength in a serialized snapshot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordStrength {
    pub word: String,
    pub strength: f64,
}

/// Serializable export of the learner's memory state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearnerSnapshot {
    /// Per-word strengths, sorted by word for stable output
    pub strengths: Vec<WordStrength>,
}

// ==================== Learner ====================

/// Synthetic learner: a mapping from vocabulary word to memory strength.
///
/// One simulation run owns exactly one learner; there is no state shared
/// across runs.
#[derive(Clone, Debug)]
pub struct Learner {
    memory: HashMap<String, f64>,
}

impl Learner {
    /// Create a learner with every vocabulary word at zero strength.
    ///
    /// Duplicate words collapse to a single memory entry.
    pub fn new(vocabulary: &[String]) -> Self {
        let memory = vocabulary
            .iter()
            .map(|word| (word.clone(), MIN_STRENGTH))
            .collect();
        Self { memory }
    }

    /// Number of distinct words tracked
    pub fn word_count(&self) -> usize {
        self.memory.len()
    }

    /// Current strength of a word, if tracked
    pub fn strength(&self, word: &str) -> Option<f64> {
        self.memory.get(word).copied()
    }

    /// Strengths for the given words, in the given order.
    ///
    /// Used by the driver to snapshot the memory state before a session's
    /// selection, so the selection sort reads consistent values.
    pub fn strength_profile(&self, words: &[String]) -> Result<Vec<f64>, LearnerError> {
        words
            .iter()
            .map(|word| {
                self.memory
                    .get(word.as_str())
                    .copied()
                    .ok_or_else(|| LearnerError::UnknownWord(word.clone()))
            })
            .collect()
    }

    /// Review a word under the given strategy, returning the new strength.
    ///
    /// The stored value is clamped to [0, 1].
    pub fn review<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<f64, LearnerError> {
        let strength = self
            .memory
            .get_mut(word)
            .ok_or_else(|| LearnerError::UnknownWord(word.to_string()))?;

        let updated = strategy
            .update_strength(*strength, rng)
            .clamp(MIN_STRENGTH, MAX_STRENGTH);
        trace!(word, strategy = strategy.as_str(), old = *strength, new = updated, "review");
        *strength = updated;
        Ok(updated)
    }

    /// One probabilistic recall trial: success probability equals the word's
    /// current strength. Does not mutate memory.
    pub fn recall<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Result<bool, LearnerError> {
        let strength = self
            .memory
            .get(word)
            .ok_or_else(|| LearnerError::UnknownWord(word.to_string()))?;
        Ok(rng.gen::<f64>() < *strength)
    }

    /// Export the memory state, sorted by word for stable serialization
    pub fn snapshot(&self) -> LearnerSnapshot {
        let mut strengths: Vec<WordStrength> = self
            .memory
            .iter()
            .map(|(word, &strength)| WordStrength {
                word: word.clone(),
                strength,
            })
            .collect();
        strengths.sort_by(|a, b| a.word.cmp(&b.word));
        LearnerSnapshot { strengths }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::types::default_vocabulary;

    const EPSILON: f64 = 1e-10;

    fn words(names: &[&str]) -> Vec<String> {
        names.iter().map(|w| w.to_string()).collect()
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_new_learner_starts_at_zero() {
        let vocabulary = default_vocabulary();
        let learner = Learner::new(&vocabulary);

        assert_eq!(learner.word_count(), 10);
        for word in &vocabulary {
            assert_eq!(learner.strength(word), Some(0.0));
        }
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let vocabulary = words(&["apple", "apple", "banana"]);
        let learner = Learner::new(&vocabulary);

        assert_eq!(learner.word_count(), 2);
    }

    #[test]
    fn test_strength_unknown_word() {
        let learner = Learner::new(&words(&["apple"]));
        assert_eq!(learner.strength("pear"), None);
    }

    // ==================== Review Tests ====================

    #[test]
    fn test_simple_review_is_deterministic_ladder() {
        let vocabulary = words(&["apple"]);
        let mut learner = Learner::new(&vocabulary);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let expected = [0.2, 0.4, 0.6, 0.8, 1.0, 1.0];
        for want in expected {
            let got = learner.review("apple", Strategy::Simple, &mut rng).unwrap();
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_spaced_review_resets_well_learned_word() {
        let vocabulary = words(&["apple"]);
        let mut learner = Learner::new(&vocabulary);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // 0.0 -> 0.3 -> 0.6, then the reset fires: 0.6 -> 0.1.
        learner.review("apple", Strategy::Spaced, &mut rng).unwrap();
        learner.review("apple", Strategy::Spaced, &mut rng).unwrap();
        assert!((learner.strength("apple").unwrap() - 0.6).abs() < EPSILON);

        let reset = learner.review("apple", Strategy::Spaced, &mut rng).unwrap();
        assert!((reset - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_review_clamp_invariant() {
        let vocabulary = words(&["apple"]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for strategy in Strategy::ALL {
            let mut learner = Learner::new(&vocabulary);
            for _ in 0..50 {
                let updated = learner.review("apple", strategy, &mut rng).unwrap();
                assert!((0.0..=1.0).contains(&updated));
            }
        }
    }

    #[test]
    fn test_review_unknown_word_fails() {
        let mut learner = Learner::new(&words(&["apple"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let err = learner.review("pear", Strategy::Simple, &mut rng).unwrap_err();
        assert_eq!(err, LearnerError::UnknownWord("pear".to_string()));
    }

    // ==================== Recall Tests ====================

    #[test]
    fn test_recall_zero_strength_never_succeeds() {
        let learner = Learner::new(&words(&["apple"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1_000 {
            assert!(!learner.recall("apple", &mut rng).unwrap());
        }
    }

    #[test]
    fn test_recall_full_strength_always_succeeds() {
        let mut learner = Learner::new(&words(&["apple"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // Five simple reviews saturate the word at 1.0; R < 1.0 for every
        // draw in [0, 1).
        for _ in 0..5 {
            learner.review("apple", Strategy::Simple, &mut rng).unwrap();
        }
        for _ in 0..1_000 {
            assert!(learner.recall("apple", &mut rng).unwrap());
        }
    }

    #[test]
    fn test_recall_with_stubbed_rng_reads_positive_strength() {
        let mut learner = Learner::new(&words(&["apple", "banana"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        learner.review("apple", Strategy::Simple, &mut rng).unwrap();

        // A stubbed generator that always draws 0.0 makes recall succeed
        // exactly when strength is positive.
        let mut stub = StepRng::new(0, 0);
        assert!(learner.recall("apple", &mut stub).unwrap());
        assert!(!learner.recall("banana", &mut stub).unwrap());
    }

    #[test]
    fn test_recall_does_not_mutate_memory() {
        let mut learner = Learner::new(&words(&["apple"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        learner.review("apple", Strategy::Simple, &mut rng).unwrap();

        let before = learner.strength("apple").unwrap();
        for _ in 0..100 {
            learner.recall("apple", &mut rng).unwrap();
        }
        let after = learner.strength("apple").unwrap();

        assert!((before - after).abs() < EPSILON);
    }

    #[test]
    fn test_recall_unknown_word_fails() {
        let learner = Learner::new(&words(&["apple"]));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let err = learner.recall("pear", &mut rng).unwrap_err();
        assert_eq!(err, LearnerError::UnknownWord("pear".to_string()));
    }

    // ==================== Profile and Snapshot Tests ====================

    #[test]
    fn test_strength_profile_follows_given_order() {
        let vocabulary = words(&["apple", "banana", "cat"]);
        let mut learner = Learner::new(&vocabulary);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        learner.review("banana", Strategy::Simple, &mut rng).unwrap();

        let profile = learner.strength_profile(&vocabulary).unwrap();

        assert_eq!(profile.len(), 3);
        assert!((profile[0] - 0.0).abs() < EPSILON);
        assert!((profile[1] - 0.2).abs() < EPSILON);
        assert!((profile[2] - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_strength_profile_unknown_word_fails() {
        let learner = Learner::new(&words(&["apple"]));
        let result = learner.strength_profile(&words(&["apple", "pear"]));

        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let vocabulary = words(&["banana", "apple"]);
        let mut learner = Learner::new(&vocabulary);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        learner.review("banana", Strategy::Simple, &mut rng).unwrap();

        let snapshot = learner.snapshot();
        // Sorted by word, not vocabulary order.
        assert_eq!(snapshot.strengths[0].word, "apple");
        assert_eq!(snapshot.strengths[1].word, "banana");

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: LearnerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.strengths.len(), 2);
        assert!((restored.strengths[1].strength - 0.2).abs() < EPSILON);
    }
}
