//! Solver configuration.

use crate::local::LocalSearchConfig;
use crate::warm::WarmStartConfig;

/// Configuration for a full two-phase solve.
///
/// # Examples
///
/// ```
/// use u_pairbal::solver::SolverConfig;
/// use u_pairbal::warm::WarmStartConfig;
///
/// let config = SolverConfig::default()
///     .with_seed(7)
///     .with_time_limit_ms(100.0)
///     .with_warm_start(WarmStartConfig::default().with_rotations(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Phase 1 parameters.
    pub warm_start: WarmStartConfig,

    /// Phase 2 parameters, including the deadline.
    pub local_search: LocalSearchConfig,

    /// Random seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl SolverConfig {
    pub fn with_warm_start(mut self, warm_start: WarmStartConfig) -> Self {
        self.warm_start = warm_start;
        self
    }

    pub fn with_local_search(mut self, local_search: LocalSearchConfig) -> Self {
        self.local_search = local_search;
        self
    }

    /// Shorthand for setting the phase 2 deadline.
    pub fn with_time_limit_ms(mut self, ms: f64) -> Self {
        self.local_search.time_limit_ms = ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates both phase configurations.
    pub fn validate(&self) -> Result<(), String> {
        self.warm_start
            .validate()
            .map_err(|e| format!("warm_start: {e}"))?;
        self.local_search
            .validate()
            .map_err(|e| format!("local_search: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.warm_start.rotations, 80);
        assert!((config.local_search.time_limit_ms - 1950.0).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_phase() {
        let config = SolverConfig::default().with_time_limit_ms(-5.0);
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("local_search:"), "{err}");

        let config = SolverConfig::default()
            .with_warm_start(WarmStartConfig::default().with_priority_decay(-1));
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("warm_start:"), "{err}");
    }
}
