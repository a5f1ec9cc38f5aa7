//! Shared configuration types for CLI commands

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, app::EnvConfig, pipeline::EpisodeConfig};

/// Configuration for the `simulate` command, loadable from JSON.
///
/// Every field is optional in the file; missing ones take the defaults below.
///
/// ```json
/// { "episodes": 500, "seed": 42, "progress": false, "env": { "opponent_name": "env" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Number of episodes to play
    pub episodes: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show a progress bar
    pub progress: bool,

    /// Environment settings
    pub env: EnvConfig,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            seed: None,
            progress: true,
            env: EnvConfig::default(),
        }
    }
}

impl SimulateConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(Error::InvalidConfiguration {
                message: "episodes must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn episode_config(&self) -> EpisodeConfig {
        EpisodeConfig {
            episodes: self.episodes,
            seed: self.seed,
        }
    }
}
