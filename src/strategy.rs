//! Review Strategies
//!
//! Each strategy is a pair of policies that always travel together:
//!
//! - **Selection policy** - which words get reviewed this session
//! - **Update policy** - how a review changes a word's memory strength
//!
//! Keeping both behind one enum variant guarantees a run can never mix the
//! selection rule of one strategy with the update rule of another.
//!
//! Strategies:
//! - `Simple` - always review the same vocabulary prefix; fixed +0.2 per review
//! - `Spaced` - always review the currently weakest words; +0.3 below the
//!   midpoint, hard reset to 0.1 at or above it (forgetting-curve triggered
//!   re-exposure, so a well-learned word deliberately loses strength)
//! - `Random` - review a uniform sample without replacement; uniform
//!   increment in [0.1, 0.3] per review

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{
    MAX_STRENGTH, RANDOM_INCREMENT_MAX, RANDOM_INCREMENT_MIN, SIMPLE_INCREMENT, SPACED_INCREMENT,
    SPACED_RESET_STRENGTH, SPACED_RESET_THRESHOLD,
};

// ==================== Strategy ====================

/// Review strategy under comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Simple,
    Spaced,
    Random,
}

impl Strategy {
    /// All strategies, in the order the comparison sweep runs them
    pub const ALL: [Strategy; 3] = [Strategy::Simple, Strategy::Spaced, Strategy::Random];

    /// Parse a strategy name; unknown names yield `None`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(Strategy::Simple),
            "spaced" => Some(Strategy::Spaced),
            "random" => Some(Strategy::Random),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::Spaced => "spaced",
            Strategy::Random => "random",
        }
    }

    /// Select the vocabulary indices to review this session, in review order.
    ///
    /// `strengths` is a snapshot of per-word memory strength aligned with the
    /// vocabulary order, taken before any review of the session mutates it.
    /// The caller guarantees `count <= strengths.len()`.
    pub fn select_words<R: Rng + ?Sized>(
        &self,
        strengths: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        match self {
            // Fixed vocabulary prefix, identical every session.
            Strategy::Simple => (0..count).collect(),
            // Weakest words first. The sort must be stable so that equal
            // strengths keep their original vocabulary order.
            Strategy::Spaced => {
                let mut order: Vec<usize> = (0..strengths.len()).collect();
                order.sort_by(|&a, &b| {
                    strengths[a]
                        .partial_cmp(&strengths[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                order.truncate(count);
                order
            }
            // Uniform sample without replacement.
            Strategy::Random => rand::seq::index::sample(rng, strengths.len(), count).into_vec(),
        }
    }

    /// Apply this strategy's memory-update rule to a single strength value.
    ///
    /// The result never exceeds [`MAX_STRENGTH`].
    pub fn update_strength<R: Rng + ?Sized>(&self, old: f64, rng: &mut R) -> f64 {
        match self {
            Strategy::Simple => (old + SIMPLE_INCREMENT).min(MAX_STRENGTH),
            Strategy::Spaced => {
                if old < SPACED_RESET_THRESHOLD {
                    (old + SPACED_INCREMENT).min(MAX_STRENGTH)
                } else {
                    SPACED_RESET_STRENGTH
                }
            }
            Strategy::Random => {
                let increment = rng.gen_range(RANDOM_INCREMENT_MIN..=RANDOM_INCREMENT_MAX);
                (old + increment).min(MAX_STRENGTH)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Tests ====================
