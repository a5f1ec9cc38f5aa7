//! Observer port - abstraction for watching episodes
//!
//! Lets the episode pipeline report progress and collect metrics without
//! knowing where the data ends up.

use crate::{
    Result,
    environment::StepResult,
    pipeline::EpisodeRecord,
    tictactoe::Action,
};

/// Observer trait for monitoring simulated episodes
///
/// # Event Sequence
///
/// 1. `on_simulation_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - After each successful `step`
///    - `on_episode_end(episode, record)`
/// 3. `on_simulation_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use fifteen::{pipeline::EpisodeRecord, ports::Observer};
///
/// struct CountingObserver {
///     finished: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_episode_end(&mut self, _episode: usize, _record: &EpisodeRecord) -> fifteen::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_simulation_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after `reset` at the start of each episode (0-based).
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each completed `step`.
    ///
    /// `agent_action` is what the agent played; `result` carries the board
    /// after the env's reply (if any), the reward and the done flag.
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _agent_action: &Action,
        _result: &StepResult,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a terminal outcome.
    fn on_episode_end(&mut self, _episode: usize, _record: &EpisodeRecord) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_simulation_end(&mut self) -> Result<()> {
        Ok(())
    }
}
