//! Common Types and Constants
//!
//! Shared data structures and the numeric parameters of the memory-update
//! rules, used across all simulation modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Lower bound of memory strength
pub const MIN_STRENGTH: f64 = 0.0;

/// Upper bound of memory strength
pub const MAX_STRENGTH: f64 = 1.0;

/// Fixed strength increment applied by the simple strategy
pub const SIMPLE_INCREMENT: f64 = 0.2;

/// Strength increment applied by the spaced strategy below the reset threshold
pub const SPACED_INCREMENT: f64 = 0.3;

/// Strength at or above which a spaced review resets the word
pub const SPACED_RESET_THRESHOLD: f64 = 0.5;

/// Strength a spaced reset assigns, regardless of the prior value
pub const SPACED_RESET_STRENGTH: f64 = 0.1;

/// Smallest increment the random strategy can draw
pub const RANDOM_INCREMENT_MIN: f64 = 0.1;

/// Largest increment the random strategy can draw
pub const RANDOM_INCREMENT_MAX: f64 = 0.3;

/// Default number of review sessions per run
pub const DEFAULT_SESSIONS: usize = 10;

/// Default number of words reviewed per session
pub const DEFAULT_REVIEWS_PER_SESSION: usize = 5;

/// Ten-word vocabulary used by the entry point
pub const DEFAULT_VOCABULARY: [&str; 10] = [
    "apple", "banana", "cat", "dog", "elephant", "fish", "grape", "hat", "ice", "jungle",
];

/// Build the default vocabulary as owned strings
pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect()
}

// ==================== Configuration ====================

/// Per-run simulation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of review sessions in the run
    pub sessions: usize,
    /// Number of words reviewed at the start of each session
    pub reviews_per_session: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sessions: DEFAULT_SESSIONS,
            reviews_per_session: DEFAULT_REVIEWS_PER_SESSION,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with explicit session and review counts
    pub fn new(sessions: usize, reviews_per_session: usize) -> Self {
        Self {
            sessions,
            reviews_per_session,
        }
    }
}

// ==================== Tests ====================
