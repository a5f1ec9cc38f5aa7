//! Terminal detection and rewards

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{board::Board, lines::is_winning, values::Player};

pub const REWARD_WIN: i32 = 10;
pub const REWARD_LOSE: i32 = -10;
pub const REWARD_TIE: i32 = 0;
pub const REWARD_RESUME: i32 = -1;

/// Result of evaluating a board, always from the agent's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Resume,
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Resume
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Resume => "Resume",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Tie => "Tie",
        };
        f.write_str(name)
    }
}

/// Fixed outcome-to-reward mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardTable {
    win: i32,
    lose: i32,
    tie: i32,
    resume: i32,
}

impl RewardTable {
    pub const STANDARD: RewardTable = RewardTable {
        win: REWARD_WIN,
        lose: REWARD_LOSE,
        tie: REWARD_TIE,
        resume: REWARD_RESUME,
    };

    pub fn reward(&self, outcome: Outcome) -> i32 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Lose => self.lose,
            Outcome::Tie => self.tie,
            Outcome::Resume => self.resume,
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Classify `board` right after `mover` placed a value.
///
/// A winning line is credited to `mover`: `Lose` if the env just moved,
/// `Win` otherwise. A full board without a winning line is a `Tie`.
/// The attribution is only sound when called after every single half-move.
pub fn is_terminal(board: &Board, mover: Player) -> (bool, Outcome) {
    if is_winning(board) {
        match mover {
            Player::Env => (true, Outcome::Lose),
            Player::Agent => (true, Outcome::Win),
        }
    } else if board.is_full() {
        (true, Outcome::Tie)
    } else {
        (false, Outcome::Resume)
    }
}
