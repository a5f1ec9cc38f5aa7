//! Episode pipeline
//!
//! Plays complete episodes against an [`crate::Environment`] on behalf of a
//! caller-supplied agent selector, and reports them to composable observers.
//! No learning happens here.

pub mod episode;
pub mod observers;

pub use episode::{EpisodeConfig, EpisodeRecord, EpisodeRunner, SimulationSummary};
pub use observers::{MetricsObserver, ProgressObserver};

pub use crate::ports::Observer;
