//! Wall-clock deadline tracking.

use std::time::Instant;

/// Source of elapsed time for deadline-bounded search.
///
/// Queried only every few iterations; implementations may be as slow as
/// a syscall.
pub trait Clock {
    /// Milliseconds elapsed since the clock's start instant.
    fn elapsed_ms(&mut self) -> f64;

    /// Whether `threshold_ms` milliseconds have elapsed.
    fn is_over(&mut self, threshold_ms: f64) -> bool {
        self.elapsed_ms() >= threshold_ms
    }
}

/// Measures time from the moment it was created.
///
/// Create it as early as possible (before reading input) so that the
/// deadline covers the whole process.
#[derive(Debug, Clone, Copy)]
pub struct TimeKeeper {
    start: Instant,
}

impl TimeKeeper {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for TimeKeeper {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for TimeKeeper {
    fn elapsed_ms(&mut self) -> f64 {
        self.start.elapsed().as_micros() as f64 * 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_keeper_starts_near_zero() {
        let mut tk = TimeKeeper::start();
        assert!(tk.elapsed_ms() < 1000.0);
        assert!(!tk.is_over(60_000.0));
    }

    #[test]
    fn test_zero_threshold_is_over() {
        let mut tk = TimeKeeper::start();
        assert!(tk.is_over(0.0));
    }

    #[test]
    fn test_elapsed_monotonic() {
        let mut tk = TimeKeeper::start();
        let a = tk.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = tk.elapsed_ms();
        assert!(b >= a);
        assert!(b >= 1.0);
    }
}
