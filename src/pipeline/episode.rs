//! Episode runner for driving an environment end to end

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    environment::Environment,
    ports::{ActionSelector, Observer},
    tictactoe::{Action, Board, Outcome},
};

/// Episode runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeConfig {
    /// Number of episodes to play
    pub episodes: usize,

    /// Random seed; the agent selector gets `seed`, the env selector `seed + 1`
    pub seed: Option<u64>,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            seed: None,
        }
    }
}

/// One finished episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub outcome: Outcome,
    /// Sum of step rewards
    pub total_return: i32,
    /// Number of `step` calls (agent moves)
    pub agent_moves: usize,
    /// Every placement in play order, agent and env interleaved
    pub moves: Vec<Action>,
    pub final_board: Board,
}

/// Aggregate of a simulation run, counted from the agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub episodes: usize,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub tie_rate: f64,
    pub mean_return: f64,
    pub mean_agent_moves: f64,
}

impl SimulationSummary {
    pub fn from_records(records: &[EpisodeRecord]) -> Self {
        let episodes = records.len();
        let count = |outcome: Outcome| records.iter().filter(|r| r.outcome == outcome).count();
        let wins = count(Outcome::Win);
        let losses = count(Outcome::Lose);
        let ties = count(Outcome::Tie);

        let ratio = |n: f64| {
            if episodes > 0 {
                n / episodes as f64
            } else {
                0.0
            }
        };

        Self {
            episodes,
            wins,
            losses,
            ties,
            win_rate: ratio(wins as f64),
            loss_rate: ratio(losses as f64),
            tie_rate: ratio(ties as f64),
            mean_return: ratio(records.iter().map(|r| r.total_return as f64).sum()),
            mean_agent_moves: ratio(records.iter().map(|r| r.agent_moves as f64).sum()),
        }
    }
}

/// Plays whole episodes: reset, then agent picks and `step`s until done.
pub struct EpisodeRunner {
    config: EpisodeConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl EpisodeRunner {
    pub fn new(config: EpisodeConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Run all configured episodes and summarize them.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the environment, a selector, or an
    /// observer.
    pub fn run<S, A>(
        &mut self,
        env: &mut Environment<S>,
        agent: &mut A,
    ) -> Result<SimulationSummary>
    where
        S: ActionSelector,
        A: ActionSelector + ?Sized,
    {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            env.selector_mut().set_rng_seed(seed.wrapping_add(1))?;
        }

        for observer in &mut self.observers {
            observer.on_simulation_start(self.config.episodes)?;
        }

        let mut records = Vec::with_capacity(self.config.episodes);
        for episode in 0..self.config.episodes {
            let record = self.play_episode(episode, env, agent)?;
            debug!(episode, outcome = %record.outcome, total_return = record.total_return, "episode finished");
            for observer in &mut self.observers {
                observer.on_episode_end(episode, &record)?;
            }
            records.push(record);
        }

        for observer in &mut self.observers {
            observer.on_simulation_end()?;
        }

        let summary = SimulationSummary::from_records(&records);
        info!(
            episodes = summary.episodes,
            wins = summary.wins,
            losses = summary.losses,
            ties = summary.ties,
            agent = agent.name(),
            env = env.selector().name(),
            "simulation finished"
        );
        Ok(summary)
    }

    fn play_episode<S, A>(
        &mut self,
        episode: usize,
        env: &mut Environment<S>,
        agent: &mut A,
    ) -> Result<EpisodeRecord>
    where
        S: ActionSelector,
        A: ActionSelector + ?Sized,
    {
        let mut board = env.reset();
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut moves = Vec::new();
        let mut total_return = 0;
        let mut step = 0;
        loop {
            let actions: Vec<Action> = env.action_space().agent_actions().collect();
            let action = agent.select_action(&board, &actions)?;
            let result = env.step(action)?;

            moves.push(action);
            moves.extend(result.env_action);
            total_return += result.reward;
            board = result.board;

            for observer in &mut self.observers {
                observer.on_step(episode, step, &action, &result)?;
            }
            step += 1;

            if result.done {
                return Ok(EpisodeRecord {
                    outcome: result.outcome,
                    total_return,
                    agent_moves: step,
                    moves,
                    final_board: board,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::{RandomSelector, ScriptedSelector};

    struct Recording(Arc<Mutex<Vec<EpisodeRecord>>>);

    impl Observer for Recording {
        fn on_episode_end(&mut self, _episode: usize, record: &EpisodeRecord) -> Result<()> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[test]
    fn scripted_episode_records_every_move() {
        let mut env = Environment::new(ScriptedSelector::new("env", [(0, 2), (1, 6)]));
        // Agent finishes the top row: 2 + 6 + 7
        let mut agent = ScriptedSelector::new("agent", [(4, 5), (8, 9), (2, 7)]);
        let records = Arc::new(Mutex::new(Vec::new()));
        let mut runner = EpisodeRunner::new(EpisodeConfig {
            episodes: 1,
            seed: None,
        })
        .with_observer(Box::new(Recording(Arc::clone(&records))));

        let summary = runner.run(&mut env, &mut agent).unwrap();
        assert_eq!(summary.episodes, 1);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.mean_return, 8.0);

        let records = records.lock().unwrap();
        let record = &records[0];
        assert_eq!(record.outcome, Outcome::Win);
        assert_eq!(record.total_return, -1 - 1 + 10);
        assert_eq!(record.agent_moves, 3);
        assert_eq!(
            record.moves,
            vec![
                Action::new(4, 5),
                Action::new(0, 2),
                Action::new(8, 9),
                Action::new(1, 6),
                Action::new(2, 7),
            ]
        );
        assert_eq!(record.final_board.encode(), "267.5...9");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = EpisodeConfig {
            episodes: 25,
            seed: Some(42),
        };

        let mut first = EpisodeRunner::new(config.clone());
        let a = first
            .run(&mut Environment::default(), &mut RandomSelector::new("agent"))
            .unwrap();
        let mut second = EpisodeRunner::new(config);
        let b = second
            .run(&mut Environment::default(), &mut RandomSelector::new("agent"))
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(a.wins + a.losses + a.ties, 25);
    }

    #[test]
    fn empty_summary_has_zero_rates() {
        let summary = SimulationSummary::from_records(&[]);
        assert_eq!(summary.episodes, 0);
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.mean_return, 0.0);
    }
}
