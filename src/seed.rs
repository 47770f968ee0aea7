//! Warm-start construction.
//!
//! [`seed_order`] schedules tasks heaviest-first with repeated reinsertion;
//! [`construct_candidate`] turns that order plus a rotation offset into a
//! starting pairing.

use crate::problem::Pairing;
use std::collections::BinaryHeap;

/// Pops `n` entries from a max-heap keyed by weight, reinserting each
/// popped task with its key lowered by `decay`.
///
/// Returns the popped `(key, task)` pairs in order. Equal keys are broken
/// by the heap's tuple ordering, which favours the larger task index.
pub(crate) fn extraction_sequence(weights: &[i64], decay: i64) -> Vec<(i64, usize)> {
    let n = weights.len();
    let mut heap: BinaryHeap<(i64, usize)> =
        weights.iter().enumerate().map(|(i, &t)| (t, i)).collect();
    let mut popped = Vec::with_capacity(n);

    for _ in 0..n {
        let Some((key, task)) = heap.pop() else {
            break;
        };
        popped.push((key, task));
        heap.push((key - decay, task));
    }
    popped
}

/// Builds the seed order used by [`construct_candidate`].
///
/// The result has length `N` and entries in `[0, N)`. A task much heavier
/// than the rest can appear several times, since it stays on top of the
/// heap until its key has decayed below the next task's.
pub fn seed_order(weights: &[i64], decay: i64) -> Vec<usize> {
    extraction_sequence(weights, decay)
        .into_iter()
        .map(|(_, task)| task)
        .collect()
}

/// Starting pairing for rotation `r`:
/// `ans[i] = ((i + r + 1) mod N, order[(i - r) mod N])`.
pub fn construct_candidate(order: &[usize], rotation: usize) -> Pairing {
    let n = order.len();
    let shift = (rotation % n) as isize;
    (0..n)
        .map(|i| {
            let first = (i + rotation + 1) % n;
            let idx = (i as isize - shift).rem_euclid(n as isize) as usize;
            (first, order[idx])
        })
        .collect()
}
