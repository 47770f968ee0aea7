//! Warm-start execution loop.
//!
//! # Algorithm
//!
//! For each rotation `r` in `0..rotations`:
//!
//! 1. Build the rotated candidate from the seed order
//! 2. Repeat `iterations_per_rotation` times:
//!    a. Score the candidate; snapshot it if strictly better than the best
//!    b. Apply one random move, unconditionally
//!
//! Moves are never evaluated or undone here. The candidate drifts, and the
//! per-iteration snapshot keeps whatever it passes through that is best.

use super::config::WarmStartConfig;
use crate::moves::random_move;
use crate::problem::{Instance, Pairing};
use crate::score::evaluate;
use crate::seed::{construct_candidate, seed_order};
use rand::Rng;

/// Result of a warm-start run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarmStartResult {
    /// The best pairing seen, including the incumbent passed in.
    pub best: Pairing,

    /// Score of `best`.
    pub best_score: i64,

    /// Total scored iterations.
    pub iterations: usize,

    /// Number of strict improvements over the best.
    pub improvements: usize,

    /// Moves that found no task to rewrite.
    pub no_op_moves: usize,

    /// Rotation whose candidate produced `best`, if any did.
    pub best_rotation: Option<usize>,

    /// Best score at the end of each rotation.
    pub cost_history: Vec<i64>,
}

/// Executes the warm-start phase.
pub struct WarmStartRunner;

impl WarmStartRunner {
    /// Runs the warm start, continuing from the incumbent `best`/`best_score`.
    ///
    /// `best` is returned unchanged when no candidate beats `best_score`.
    pub fn run<R: Rng>(
        instance: &Instance,
        config: &WarmStartConfig,
        best: Pairing,
        best_score: i64,
        rng: &mut R,
    ) -> WarmStartResult {
        config.validate().expect("invalid WarmStartConfig");

        let weights = instance.weights();
        let order = seed_order(weights, config.priority_decay);
        let mut dev = vec![0i64; instance.len()];

        let mut best = best;
        let mut best_score = best_score;
        let mut best_rotation = None;
        let mut iterations = 0usize;
        let mut improvements = 0usize;
        let mut no_op_moves = 0usize;
        let mut cost_history = Vec::with_capacity(config.rotations);

        tracing::debug!(
            rotations = config.rotations,
            iterations_per_rotation = config.iterations_per_rotation,
            incumbent = best_score,
            "warm start begins"
        );

        for rotation in 0..config.rotations {
            let mut candidate = construct_candidate(&order, rotation);

            for _ in 0..config.iterations_per_rotation {
                let score = evaluate(weights, &candidate, &mut dev);
                if score < best_score {
                    tracing::trace!(rotation, score, "warm start improved");
                    best.clone_from(&candidate);
                    best_score = score;
                    best_rotation = Some(rotation);
                    improvements += 1;
                }

                if random_move(&mut candidate, &dev, rng).is_none() {
                    no_op_moves += 1;
                }
                iterations += 1;
            }

            cost_history.push(best_score);
        }

        tracing::debug!(
            best_score,
            improvements,
            ?best_rotation,
            "warm start finished"
        );

        WarmStartResult {
            best,
            best_score,
            iterations,
            improvements,
            no_op_moves,
            best_rotation,
            cost_history,
        }
    }
}
