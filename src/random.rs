//! Random stream shared by every search component.
//!
//! There is no global generator: the solver owns one RNG and hands out
//! `&mut R` to each phase, so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates the crate's standard generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives a seed from the wall clock (milliseconds since the Unix epoch).
///
/// Runs seeded this way are not reproducible.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Uniform draws used by the search, on top of any [`Rng`].
pub trait UniformExt: Rng {
    /// Uniform integer in `[0, m)`. `m` must be positive.
    #[inline]
    fn next_int(&mut self, m: usize) -> usize {
        self.random_range(0..m)
    }

    /// Uniform real in `[0, 1)`.
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.random::<f64>()
    }

    /// Natural log of a uniform real in `[0, 1)`.
    #[inline]
    fn next_log(&mut self) -> f64 {
        self.next_double().ln()
    }

    /// True with probability `percent / 100`, drawn as `next_int(100) < percent`.
    #[inline]
    fn percent(&mut self, percent: usize) -> bool {
        self.next_int(100) < percent
    }
}

impl<R: Rng> UniformExt for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.next_int(1000), b.next_int(1000));
        }
    }

    #[test]
    fn test_next_int_in_range() {
        let mut rng = create_rng(1);
        for m in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_int(m) < m);
            }
        }
    }

    #[test]
    fn test_next_int_one_is_zero() {
        let mut rng = create_rng(3);
        assert!((0..100).all(|_| rng.next_int(1) == 0));
    }

    #[test]
    fn test_next_double_unit_interval() {
        let mut rng = create_rng(2);
        for _ in 0..1000 {
            let x = rng.next_double();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_next_log_non_positive() {
        let mut rng = create_rng(5);
        for _ in 0..1000 {
            assert!(rng.next_log() <= 0.0);
        }
    }

    #[test]
    fn test_percent_extremes() {
        let mut rng = create_rng(9);
        assert!((0..200).all(|_| rng.percent(100)));
        assert!((0..200).all(|_| !rng.percent(0)));
    }
}
