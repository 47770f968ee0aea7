//! Local search execution loop.
//!
//! # Algorithm
//!
//! Starting from the incumbent, until the deadline:
//!
//! 1. Every `clock_check_interval` loop entries, stop if time is up
//! 2. Snapshot the current pairing if it beats the best
//! 3. Apply one random move; if no task could be rewritten, start over
//! 4. Score the moved pairing and accept when `improved XOR noise`, where
//!    `noise` fires with `noise_percent`% probability. Rejection reverts
//!    the single rewritten field
//!
//! The noise term is the only source of uphill moves. There is no
//! temperature.

use super::config::{LocalSearchConfig, ScoringMode};
use crate::clock::Clock;
use crate::moves::random_move;
use crate::problem::{Instance, Pairing};
use crate::random::UniformExt;
use crate::score::{apply_retarget, evaluate, retarget_delta};
use rand::Rng;

/// Result of a local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    /// The best pairing found, including the incumbent passed in.
    pub best: Pairing,

    /// Score of `best`.
    pub best_score: i64,

    /// Score of the working pairing when the search stopped.
    pub final_score: i64,

    /// Loop iterations completed (scored moves plus no-op moves).
    pub iterations: usize,

    /// Moves that were applied and scored.
    pub evaluated_moves: usize,

    /// Moves that found no task to rewrite.
    pub no_op_moves: usize,

    /// Scored moves that were kept.
    pub accepted_moves: usize,

    /// Scored moves that strictly lowered the working score.
    pub improving_moves: usize,

    /// Scored moves whose accept/reject decision the noise inverted.
    pub inverted_decisions: usize,

    /// Times the best pairing was replaced.
    pub improvements: usize,

    /// Times the clock was queried.
    pub clock_checks: usize,

    /// Whether the deadline (rather than the iteration budget) ended the run.
    pub timed_out: bool,

    /// Best score sampled at every clock check.
    pub cost_history: Vec<i64>,
}

/// Executes the deadline-bounded local search.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search from `best` until `clock` passes the deadline.
    ///
    /// The working pairing starts as a copy of `best`; `best_score` may be
    /// stale (e.g. a sentinel) and is only replaced on strict improvement.
    ///
    /// The best is snapshotted at the top of each iteration and once more
    /// after the loop exits, so a move accepted in the final iterations
    /// before the deadline still reaches the returned `best`.
    pub fn run<R: Rng, C: Clock>(
        instance: &Instance,
        config: &LocalSearchConfig,
        best: Pairing,
        best_score: i64,
        clock: &mut C,
        rng: &mut R,
    ) -> LocalSearchResult {
        config.validate().expect("invalid LocalSearchConfig");

        let weights = instance.weights();
        let n = instance.len();
        let reject_below = 100 - config.noise_percent;

        let mut current = best.clone();
        let mut dev = vec![0i64; n];
        let mut scratch = vec![0i64; n];
        let mut score = evaluate(weights, &current, &mut dev);

        let mut best = best;
        let mut best_score = best_score;

        let mut loop_count = 0u64;
        let mut iterations = 0usize;
        let mut evaluated_moves = 0usize;
        let mut no_op_moves = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut inverted_decisions = 0usize;
        let mut improvements = 0usize;
        let mut clock_checks = 0usize;
        let mut timed_out = false;
        let mut cost_history = vec![best_score.min(score)];

        tracing::debug!(
            start_score = score,
            incumbent = best_score,
            time_limit_ms = config.time_limit_ms,
            "local search begins"
        );

        loop {
            loop_count += 1;
            if loop_count % config.clock_check_interval == 0 {
                clock_checks += 1;
                if clock.is_over(config.time_limit_ms) {
                    timed_out = true;
                    break;
                }
                cost_history.push(best_score.min(score));
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            if score < best_score {
                tracing::trace!(score, iterations, "local search improved");
                best.clone_from(&current);
                best_score = score;
                improvements += 1;
            }

            iterations += 1;
            let Some(mv) = random_move(&mut current, &dev, rng) else {
                no_op_moves += 1;
                continue;
            };
            evaluated_moves += 1;

            let new_score = match config.scoring {
                ScoringMode::Full => evaluate(weights, &current, &mut scratch),
                ScoringMode::Incremental => {
                    score + retarget_delta(&dev, weights[mv.task], mv.from, mv.to)
                }
            };

            let improved = new_score < score;
            let noise = rng.next_int(100) >= reject_below;
            if improved {
                improving_moves += 1;
            }
            if noise {
                inverted_decisions += 1;
            }

            if improved ^ noise {
                accepted_moves += 1;
                score = new_score;
                match config.scoring {
                    ScoringMode::Full => std::mem::swap(&mut dev, &mut scratch),
                    ScoringMode::Incremental => {
                        apply_retarget(&mut dev, weights[mv.task], mv.from, mv.to)
                    }
                }
            } else {
                mv.revert(&mut current);
            }
        }

        // An accepted improvement from the last iterations is not lost.
        if score < best_score {
            best.clone_from(&current);
            best_score = score;
            improvements += 1;
        }
        if cost_history.last().is_none_or(|&last| last != best_score) {
            cost_history.push(best_score);
        }

        tracing::debug!(
            best_score,
            iterations,
            accepted_moves,
            no_op_moves,
            timed_out,
            "local search finished"
        );

        LocalSearchResult {
            best,
            best_score,
            final_score: score,
            iterations,
            evaluated_moves,
            no_op_moves,
            accepted_moves,
            improving_moves,
            inverted_decisions,
            improvements,
            clock_checks,
            timed_out,
            cost_history,
        }
    }
}
