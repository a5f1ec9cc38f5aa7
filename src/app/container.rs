//! Factory wiring environments to their selectors.

use super::config::EnvConfig;
use crate::{Environment, adapters::RandomSelector};

/// Application entry point that builds environments and agent selectors.
///
/// A default seed set here applies to every environment created without its
/// own seed.
///
/// # Examples
///
/// ```
/// use fifteen::app::{App, EnvConfig};
///
/// let app = App::new().with_default_seed(7);
/// let mut env = app.create_environment(&EnvConfig::default());
/// env.reset();
/// assert!(!env.is_done());
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    default_seed: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        Self { default_seed: None }
    }

    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Build an environment whose env player moves uniformly at random
    pub fn create_environment(&self, config: &EnvConfig) -> Environment<RandomSelector> {
        let selector = match config.seed.or(self.default_seed) {
            Some(seed) => RandomSelector::with_seed(config.opponent_name.clone(), seed),
            None => RandomSelector::new(config.opponent_name.clone()),
        };
        Environment::new(selector)
    }

    /// Build a uniform random agent, seeded from the app default when set
    pub fn create_random_agent(&self, name: impl Into<String>) -> RandomSelector {
        match self.default_seed {
            Some(seed) => RandomSelector::with_seed(name, seed),
            None => RandomSelector::new(name),
        }
    }
}
