//! Bounded local search (phase 2).
//!
//! Continues from the warm-start incumbent until a wall-clock deadline,
//! using the same move as the warm start but with an accept/reject step.
//! Acceptance is plain descent with a flat chance of inverting each
//! decision, which occasionally takes a worsening move and occasionally
//! drops an improving one.

mod config;
mod runner;

pub use config::{LocalSearchConfig, ScoringMode};
pub use runner::{LocalSearchResult, LocalSearchRunner};
