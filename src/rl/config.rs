//! Actor-critic hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Hyperparameters for the online actor-critic agent
///
/// # Example
///
/// ```rust
/// use gridworld_ac::rl::AgentConfig;
///
/// let config = AgentConfig {
///     learning_rate: 1e-2,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate for the Adam optimizer
    ///
    /// The rate is fixed for the whole run; the agent performs one optimizer
    /// step per environment transition.
    ///
    /// Default: 1e-3
    pub learning_rate: f64,
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.learning_rate <= 0.0 {
            return Err(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            ));
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.learning_rate, 1e-3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_learning_rate() {
        let mut config = AgentConfig::default();
        config.learning_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_learning_rate() {
        let mut config = AgentConfig::default();
        config.learning_rate = 0.0;
        assert!(config.validate().is_err());
    }
}
