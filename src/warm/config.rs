//! Warm-start configuration.

/// Configuration for the fixed-budget warm-start phase.
///
/// # Examples
///
/// ```
/// use u_pairbal::warm::WarmStartConfig;
///
/// let config = WarmStartConfig::default()
///     .with_rotations(10)
///     .with_iterations_per_rotation(200);
/// assert_eq!(config.total_iterations(), 2000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarmStartConfig {
    /// Number of rotated starting candidates built from the seed order.
    pub rotations: usize,

    /// Drift iterations spent on each candidate.
    pub iterations_per_rotation: usize,

    /// Amount a task's heap key drops each time the seed generator
    /// schedules it.
    pub priority_decay: i64,
}

impl Default for WarmStartConfig {
    fn default() -> Self {
        Self {
            rotations: 80,
            iterations_per_rotation: 1000,
            priority_decay: 2500,
        }
    }
}

impl WarmStartConfig {
    pub fn with_rotations(mut self, n: usize) -> Self {
        self.rotations = n;
        self
    }

    pub fn with_iterations_per_rotation(mut self, n: usize) -> Self {
        self.iterations_per_rotation = n;
        self
    }

    pub fn with_priority_decay(mut self, decay: i64) -> Self {
        self.priority_decay = decay;
        self
    }

    /// Total scored iterations the phase will run.
    pub fn total_iterations(&self) -> usize {
        self.rotations * self.iterations_per_rotation
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.priority_decay < 0 {
            return Err(format!(
                "priority_decay must be non-negative, got {}",
                self.priority_decay
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WarmStartConfig::default();
        assert_eq!(config.rotations, 80);
        assert_eq!(config.iterations_per_rotation, 1000);
        assert_eq!(config.priority_decay, 2500);
        assert_eq!(config.total_iterations(), 80_000);
    }

    #[test]
    fn test_validate_ok() {
        assert!(WarmStartConfig::default().validate().is_ok());
        assert!(WarmStartConfig::default()
            .with_rotations(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_negative_decay() {
        let config = WarmStartConfig::default().with_priority_decay(-1);
        assert!(config.validate().is_err());
    }
}
