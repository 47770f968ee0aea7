//! Random instance generation matching the contest's input distribution.

use super::types::Instance;
use crate::random::create_rng;
use rand::Rng;

/// Number of tasks in a generated instance.
pub const GENERATED_TASKS: usize = 100;

/// Horizon `L` of a generated instance; weights always sum to it.
pub const GENERATED_HORIZON: u64 = 500_000;

/// Upper bound of each freely drawn weight.
pub const MAX_DRAWN_WEIGHT: i64 = 10_000;

/// Generates an instance from `seed`.
pub fn generate(seed: u64) -> Instance {
    generate_with(&mut create_rng(seed))
}

/// Generates an instance from an existing random stream.
///
/// The first `N - 1` weights are drawn from `[0, 10000]` until their sum
/// lies in `[L - 10000, L]`; the last weight makes up the difference, so
/// weights always sum to `L`.
pub fn generate_with<R: Rng>(rng: &mut R) -> Instance {
    let horizon = GENERATED_HORIZON as i64;
    let mut weights = vec![0i64; GENERATED_TASKS];

    loop {
        let mut sum = 0;
        for w in weights.iter_mut().take(GENERATED_TASKS - 1) {
            *w = rng.random_range(0..=MAX_DRAWN_WEIGHT);
            sum += *w;
        }
        if (horizon - MAX_DRAWN_WEIGHT..=horizon).contains(&sum) {
            weights[GENERATED_TASKS - 1] = horizon - sum;
            break;
        }
    }

    Instance {
        weights,
        horizon: GENERATED_HORIZON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_shape() {
        let inst = generate(0);
        assert_eq!(inst.len(), GENERATED_TASKS);
        assert_eq!(inst.horizon(), GENERATED_HORIZON);
        assert_eq!(inst.weights().iter().sum::<i64>(), GENERATED_HORIZON as i64);
        assert!(inst
            .weights()
            .iter()
            .all(|&w| (0..=MAX_DRAWN_WEIGHT).contains(&w)));
    }

    #[test]
    fn test_generation_is_seeded() {
        assert_eq!(generate(42), generate(42));
        assert_ne!(generate(1), generate(2));
    }
}
