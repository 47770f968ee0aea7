//! Two-phase solve: warm start, then deadline-bounded local search.

use super::config::SolverConfig;
use crate::clock::Clock;
use crate::local::{LocalSearchResult, LocalSearchRunner};
use crate::problem::{Instance, Pairing};
use crate::random::{clock_seed, create_rng};
use crate::warm::{WarmStartResult, WarmStartRunner};
use rand::Rng;

/// Score assigned to the fallback pairing before anything has been scored.
pub const SCORE_SENTINEL: i64 = 100_000_000_000_000;

/// Result of a full solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// The best pairing found.
    pub pairing: Pairing,

    /// Score of `pairing`.
    pub score: i64,

    /// Seed the random stream was created from, when the solver created it.
    pub seed: Option<u64>,

    /// Phase 1 statistics.
    pub warm_start: WarmStartResult,

    /// Phase 2 statistics.
    pub local_search: LocalSearchResult,
}

/// Runs both search phases.
pub struct Solver;

impl Solver {
    /// Solves `instance`, creating the random stream from `config.seed`
    /// (or the wall clock when unset).
    pub fn solve<C: Clock>(instance: &Instance, config: &SolverConfig, clock: &mut C) -> SolveResult {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = create_rng(seed);
        let mut result = Self::solve_with_rng(instance, config, clock, &mut rng);
        result.seed = Some(seed);
        result
    }

    /// Solves `instance` with a caller-owned random stream.
    ///
    /// The best-known pairing starts as the fallback pairing with score
    /// [`SCORE_SENTINEL`], so a valid answer exists even if neither phase
    /// improves on it.
    pub fn solve_with_rng<C: Clock, R: Rng>(
        instance: &Instance,
        config: &SolverConfig,
        clock: &mut C,
        rng: &mut R,
    ) -> SolveResult {
        config.validate().expect("invalid SolverConfig");

        tracing::info!(tasks = instance.len(), "solving");

        let warm_start = WarmStartRunner::run(
            instance,
            &config.warm_start,
            instance.fallback_pairing(),
            SCORE_SENTINEL,
            rng,
        );
        tracing::info!(
            score = warm_start.best_score,
            elapsed_ms = clock.elapsed_ms(),
            "warm start done"
        );

        let local_search = LocalSearchRunner::run(
            instance,
            &config.local_search,
            warm_start.best.clone(),
            warm_start.best_score,
            clock,
            rng,
        );
        tracing::info!(
            score = local_search.best_score,
            iterations = local_search.iterations,
            "local search done"
        );

        SolveResult {
            pairing: local_search.best.clone(),
            score: local_search.best_score,
            seed: None,
            warm_start,
            local_search,
        }
    }
}
