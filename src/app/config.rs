//! Configuration types for environment creation.

use serde::{Deserialize, Serialize};

/// Configuration for creating an [`crate::Environment`].
///
/// # Examples
///
/// ```
/// use fifteen::app::EnvConfig;
///
/// let config = EnvConfig::new().with_seed(42).with_opponent_name("env-random");
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Seed for the env player's random moves (None = non-deterministic)
    pub seed: Option<u64>,
    /// Name given to the env player's selector, shown in logs
    pub opponent_name: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self {
            seed: None,
            opponent_name: "env".to_string(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EnvConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.opponent_name, "env");
    }
}
