//! Warm start (phase 1).
//!
//! A fixed-budget search over rotated candidates built from a
//! heaviest-first seed order. Each candidate drifts under random moves
//! that are never undone; the phase keeps the best pairing it passes
//! through. Runs a deterministic number of iterations, so its result is
//! reproducible for a fixed seed regardless of machine speed.

mod config;
mod runner;

pub use config::WarmStartConfig;
pub use runner::{WarmStartResult, WarmStartRunner};
