//! Local search configuration.

/// How a candidate move is scored.
///
/// Both modes produce identical scores, so a run is the same move for move
/// under either; only the cost per iteration differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringMode {
    /// Rescore the whole pairing after every move. O(N) per iteration.
    #[default]
    Full,

    /// Update only the two deviations a move touches. O(1) per iteration.
    Incremental,
}

/// Configuration for the deadline-bounded local search.
///
/// # Examples
///
/// ```
/// use u_pairbal::local::{LocalSearchConfig, ScoringMode};
///
/// let config = LocalSearchConfig::default()
///     .with_time_limit_ms(500.0)
///     .with_scoring(ScoringMode::Incremental);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Deadline in milliseconds, measured by the clock passed to the runner.
    pub time_limit_ms: f64,

    /// The clock is queried once every this many loop iterations.
    pub clock_check_interval: u64,

    /// Chance (in percent) that the accept/reject decision is inverted.
    pub noise_percent: usize,

    /// Scoring strategy for candidate moves.
    pub scoring: ScoringMode,

    /// Hard iteration budget on top of the deadline. 0 = no limit.
    pub max_iterations: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 1950.0,
            clock_check_interval: 128,
            noise_percent: 5,
            scoring: ScoringMode::Full,
            max_iterations: 0,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_time_limit_ms(mut self, ms: f64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_clock_check_interval(mut self, n: u64) -> Self {
        self.clock_check_interval = n;
        self
    }

    pub fn with_noise_percent(mut self, percent: usize) -> Self {
        self.noise_percent = percent;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.time_limit_ms.is_finite() || self.time_limit_ms < 0.0 {
            return Err(format!(
                "time_limit_ms must be finite and non-negative, got {}",
                self.time_limit_ms
            ));
        }
        if self.clock_check_interval == 0 {
            return Err("clock_check_interval must be positive".into());
        }
        if self.noise_percent > 100 {
            return Err(format!(
                "noise_percent must be at most 100, got {}",
                self.noise_percent
            ));
        }
        Ok(())
    }
}
