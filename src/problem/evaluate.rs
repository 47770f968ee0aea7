//! Replays the cleaning-duty process a pairing describes.
//!
//! Starting at task 0, each step records a visit to the current task and
//! moves on: after an odd number of visits to `i` the next task is `a_i`,
//! after an even number it is `b_i`. Over a long horizon each task's visit
//! count approaches the load the [`score`](crate::score) module balances, so
//! this is the ground truth the search is optimising for.

use super::types::{Instance, Pairing};

/// Outcome of [`simulate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// How many of the `L` steps landed on each task.
    pub counts: Vec<u64>,
    /// `2L - sum |counts[i] - T[i]|`. Higher is better.
    pub score: i64,
}

/// Runs the process for `instance.horizon()` steps.
///
/// `pairing` must hold `instance.len()` pairs with indices in range; use
/// [`parse_output`](super::parse_output) to check untrusted input first.
pub fn simulate(instance: &Instance, pairing: &Pairing) -> Evaluation {
    let n = instance.len();
    let mut counts = vec![0u64; n];
    let mut pos = 0usize;

    for _ in 0..instance.horizon() {
        counts[pos] += 1;
        let (a, b) = pairing[pos];
        pos = if counts[pos] % 2 == 1 { a } else { b };
    }

    let error: i64 = counts
        .iter()
        .zip(instance.weights())
        .map(|(&c, &t)| (c as i64 - t).abs())
        .sum();

    Evaluation {
        score: 2 * instance.horizon() as i64 - error,
        counts,
    }
}
