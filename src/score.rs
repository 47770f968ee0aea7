//! Pairing evaluation.
//!
//! A pairing charges task `i`'s weight `T[i]` to both of its targets. The
//! deviation of worker `w` is its charged load minus `2 * T[w]`, and the
//! score is the sum of absolute deviations. Deviations always sum to zero,
//! so the search is only ever moving slack between workers.
//!
//! [`evaluate`] is the hot path of both search phases.

use crate::problem::Pair;

/// Computes deviations into `dev` and returns the score.
///
/// Two linear passes: loads are accumulated into `dev`, then each entry has
/// `2 * T[w]` subtracted. `dev` must have the same length as `weights`.
pub fn evaluate(weights: &[i64], pairing: &[Pair], dev: &mut [i64]) -> i64 {
    debug_assert_eq!(weights.len(), pairing.len());
    debug_assert_eq!(weights.len(), dev.len());

    dev.fill(0);
    for (&(a, b), &t) in pairing.iter().zip(weights) {
        dev[a] += t;
        dev[b] += t;
    }

    let mut score = 0;
    for (d, &t) in dev.iter_mut().zip(weights) {
        *d -= 2 * t;
        score += d.abs();
    }
    score
}

/// Allocating variant of [`evaluate`]: returns `(score, deviations)`.
pub fn deviations(weights: &[i64], pairing: &[Pair]) -> (i64, Vec<i64>) {
    let mut dev = vec![0; weights.len()];
    let score = evaluate(weights, pairing, &mut dev);
    (score, dev)
}

/// Score change from moving one charge of `weight` from worker `from` to `to`.
///
/// Only the two touched deviations change, so this is O(1). Equal to
/// rescoring with [`evaluate`] after the move.
#[inline]
pub fn retarget_delta(dev: &[i64], weight: i64, from: usize, to: usize) -> i64 {
    if from == to {
        return 0;
    }
    let (f, t) = (dev[from], dev[to]);
    (f - weight).abs() - f.abs() + (t + weight).abs() - t.abs()
}

/// Applies the deviation update matching [`retarget_delta`].
#[inline]
pub fn apply_retarget(dev: &mut [i64], weight: i64, from: usize, to: usize) {
    dev[from] -= weight;
    dev[to] += weight;
}
