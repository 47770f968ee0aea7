//! End-to-end solver.
//!
//! Ties the phases together: the fallback pairing is the incumbent until
//! the warm start beats it, and the warm start's best seeds the local
//! search. One random stream is created per solve and threaded through
//! both phases in order.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{SolveResult, Solver, SCORE_SENTINEL};
