//! # danci-sim - Vocabulary Review-Strategy Simulation
//!
//! A stochastic simulation comparing review strategies by tracking a
//! synthetic learner's per-word memory strength over repeated review
//! sessions and estimating recall probability after each session.
//!
//! Model:
//! - Each vocabulary word carries a memory strength in [0, 1]
//! - A review mutates the strength through the active strategy's update rule
//! - A recall check is a Bernoulli trial with success probability equal to
//!   the current strength
//! - A session is one review pass followed by one recall measurement over
//!   the whole vocabulary; the per-session success fraction is the output
//!
//! Strategies under comparison:
//! - [`Strategy::Simple`] - fixed vocabulary prefix, fixed +0.2 increment
//! - [`Strategy::Spaced`] - weakest words first, with a deliberate reset to
//!   0.1 once a word reaches the midpoint
//! - [`Strategy::Random`] - uniform sample without replacement, uniform
//!   increment in [0.1, 0.3]
//!
//! ## Usage
//!
//! ```rust
//! use danci_sim::{default_vocabulary, Simulation, SimulationConfig, Strategy};
//!
//! let mut sim = Simulation::with_seed(default_vocabulary(), 42);
//! let history = sim.run(Strategy::Spaced, &SimulationConfig::default()).unwrap();
//! assert_eq!(history.len(), 10);
//! assert!(history.iter().all(|&r| (0.0..=1.0).contains(&r)));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod learner;
pub mod simulation;
pub mod strategy;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export shared types and constants
pub use types::{default_vocabulary, SimulationConfig, DEFAULT_VOCABULARY};

/// Re-export the learner memory model
pub use learner::{Learner, LearnerError, LearnerSnapshot, WordStrength};

/// Re-export the review strategies
pub use strategy::Strategy;

/// Re-export the simulation driver
pub use simulation::{compare, compare_seeded, Simulation, SimulationError, StrategyRun};
