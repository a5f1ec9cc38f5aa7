//! The reinforcement-learning environment
//!
//! [`Environment`] owns the board and runs the turn state machine: the agent
//! places an odd value, the board is checked, the injected selector answers
//! with an even value, and the board is checked again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    adapters::RandomSelector,
    ports::ActionSelector,
    tictactoe::{
        Action, ActionSpace, AllowedValues, Board, Outcome, Player, RewardTable, allowed_positions,
        allowed_values, is_terminal, state_transition,
    },
};

/// What a single [`Environment::step`] produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the agent's move and, unless the agent ended the game, the
    /// env's reply
    pub board: Board,
    pub reward: i32,
    pub done: bool,
    pub outcome: Outcome,
    /// The env's reply, `None` when the agent's move ended the game
    pub env_action: Option<Action>,
}

/// Numeric Tic-Tac-Toe environment with an injectable env opponent.
///
/// # Examples
///
/// ```
/// use fifteen::{
///     Environment,
///     adapters::RandomSelector,
///     tictactoe::{Action, Outcome},
/// };
///
/// let mut env = Environment::new(RandomSelector::with_seed("env", 42));
/// let board = env.reset();
/// assert_eq!(board.occupied_count(), 0);
///
/// let result = env.step(Action::new(4, 5))?;
/// assert_eq!(result.outcome, Outcome::Resume);
/// assert_eq!(result.reward, -1);
/// assert_eq!(env.board().occupied_count(), 2);
/// # Ok::<(), fifteen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Environment<S = RandomSelector> {
    board: Board,
    rewards: RewardTable,
    env_selector: S,
}

impl Environment<RandomSelector> {
    /// Environment whose env player moves uniformly at random with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSelector::with_seed("env", seed))
    }
}

impl Default for Environment<RandomSelector> {
    fn default() -> Self {
        Self::new(RandomSelector::new("env"))
    }
}

impl<S: ActionSelector> Environment<S> {
    /// Create an environment with an empty board and the given env strategy
    pub fn new(env_selector: S) -> Self {
        Self {
            board: Board::new(),
            rewards: RewardTable::STANDARD,
            env_selector,
        }
    }

    /// Clear every cell and return the fresh board
    pub fn reset(&mut self) -> Board {
        self.board = Board::new();
        self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the current board, e.g. to start from a given position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    pub fn selector(&self) -> &S {
        &self.env_selector
    }

    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.env_selector
    }

    /// Empty cells of the current board
    pub fn allowed_positions(&self) -> Vec<usize> {
        allowed_positions(&self.board)
    }

    /// Unused values of the current board, split by owner
    pub fn allowed_values(&self) -> AllowedValues {
        allowed_values(&self.board)
    }

    /// Both players' action spaces for the current board
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::new(&self.board)
    }

    /// Whether the current board is finished (win, loss or tie)
    pub fn is_done(&self) -> bool {
        is_terminal(&self.board, Player::Env).0
    }

    /// Play one full turn: the agent's `action`, then the env's reply.
    ///
    /// The board is checked right after each half-move so that a winning line
    /// is credited to the player who completed it; if the agent's move ends
    /// the game the env does not move.
    ///
    /// The turn is staged on a copy of the board and committed only once it
    /// has fully succeeded; an error leaves the environment untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::GameAlreadyCompleted`] if the board is already terminal
    /// - [`Error::IllegalAction`] if `action` is not in the agent's action
    ///   space, or the selector answers outside the env's action space
    /// - any error returned by the env selector
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        if self.is_done() {
            return Err(Error::GameAlreadyCompleted);
        }

        let space = ActionSpace::new(&self.board);
        if !space.contains(Player::Agent, action) {
            return Err(Error::IllegalAction {
                position: action.position,
                value: action.value,
            });
        }

        let mut next = self.board;
        state_transition(&mut next, action)?;
        let (done, outcome) = is_terminal(&next, Player::Agent);
        debug!(player = "agent", %action, board = %next.encode(), %outcome, "half-move");

        if done {
            self.board = next;
            return Ok(StepResult {
                board: next,
                reward: self.rewards.reward(outcome),
                done,
                outcome,
                env_action: None,
            });
        }

        let env_space = ActionSpace::new(&next);
        let env_actions: Vec<Action> = env_space.env_actions().collect();
        let env_action = self.env_selector.select_action(&next, &env_actions)?;
        if !env_space.contains(Player::Env, env_action) {
            return Err(Error::IllegalAction {
                position: env_action.position,
                value: env_action.value,
            });
        }

        state_transition(&mut next, env_action)?;
        let (done, outcome) = is_terminal(&next, Player::Env);
        debug!(player = "env", action = %env_action, board = %next.encode(), %outcome, "half-move");

        self.board = next;
        Ok(StepResult {
            board: next,
            reward: self.rewards.reward(outcome),
            done,
            outcome,
            env_action: Some(env_action),
        })
    }
}
