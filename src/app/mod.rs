//! Application layer: configuration and environment factories.
//!
//! # Usage
//!
//! ```
//! use fifteen::app::{App, EnvConfig};
//!
//! let app = App::new();
//! let env = app.create_environment(&EnvConfig::new().with_seed(42));
//! assert_eq!(env.board().occupied_count(), 0);
//! ```

pub mod config;
pub mod container;

pub use config::EnvConfig;
pub use container::App;
