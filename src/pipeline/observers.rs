//! Observer implementations for episode runs

use indicatif::{ProgressBar, ProgressStyle};

use super::episode::EpisodeRecord;
use crate::{Result, ports::Observer, tictactoe::Outcome};

/// Progress bar observer - Shows simulation progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    ties: usize,
    losses: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            ties: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} T:{} L:{}", self.wins, self.ties, self.losses)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_simulation_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, record: &EpisodeRecord) -> Result<()> {
        match record.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Resume => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks outcome counts and episode lengths
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    wins: usize,
    ties: usize,
    losses: usize,
    agent_moves: Vec<usize>,
    returns: Vec<i32>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_episodes(&self) -> usize {
        self.agent_moves.len()
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Average number of agent moves per episode
    pub fn avg_episode_length(&self) -> f64 {
        if self.agent_moves.is_empty() {
            0.0
        } else {
            self.agent_moves.iter().sum::<usize>() as f64 / self.agent_moves.len() as f64
        }
    }

    pub fn avg_return(&self) -> f64 {
        if self.returns.is_empty() {
            0.0
        } else {
            self.returns.iter().map(|&r| r as f64).sum::<f64>() / self.returns.len() as f64
        }
    }

    /// Longest episode seen, in agent moves
    pub fn max_episode_length(&self) -> usize {
        self.agent_moves.iter().copied().max().unwrap_or(0)
    }

    fn rate(&self, count: usize) -> f64 {
        let total = self.total_episodes();
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, record: &EpisodeRecord) -> Result<()> {
        match record.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Resume => {}
        }
        self.agent_moves.push(record.agent_moves);
        self.returns.push(record.total_return);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn record(outcome: Outcome, agent_moves: usize, total_return: i32) -> EpisodeRecord {
        EpisodeRecord {
            outcome,
            total_return,
            agent_moves,
            moves: Vec::new(),
            final_board: Board::new(),
        }
    }

    #[test]
    fn metrics_accumulate_rates_and_lengths() {
        let mut metrics = MetricsObserver::new();
        metrics.on_episode_end(0, &record(Outcome::Win, 3, 8)).unwrap();
        metrics.on_episode_end(1, &record(Outcome::Lose, 2, -11)).unwrap();
        metrics.on_episode_end(2, &record(Outcome::Tie, 5, -4)).unwrap();
        metrics.on_episode_end(3, &record(Outcome::Win, 4, 7)).unwrap();

        assert_eq!(metrics.total_episodes(), 4);
        assert_eq!(metrics.win_rate(), 0.5);
        assert_eq!(metrics.loss_rate(), 0.25);
        assert_eq!(metrics.tie_rate(), 0.25);
        assert_eq!(metrics.avg_episode_length(), 3.5);
        assert_eq!(metrics.avg_return(), 0.0);
        assert_eq!(metrics.max_episode_length(), 5);
    }

    #[test]
    fn progress_observer_runs_without_terminal() {
        let mut progress = ProgressObserver::new();
        progress.on_simulation_start(2).unwrap();
        progress.on_episode_end(0, &record(Outcome::Win, 3, 8)).unwrap();
        progress.on_episode_end(1, &record(Outcome::Tie, 5, -4)).unwrap();
        progress.on_simulation_end().unwrap();
        assert_eq!(progress.tally(), "1 T:1 L:0");
    }
}
