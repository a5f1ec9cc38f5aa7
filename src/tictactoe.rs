//! Numeric Tic-Tac-Toe rules
//!
//! Pure functions over [`Board`]: none of them touch an environment, so any
//! board can be inspected directly.

pub mod action;
pub mod board;
pub mod lines;
pub mod outcome;
pub mod transition;
pub mod values;

pub use action::{Action, ActionSpace, action_space, allowed_positions};
pub use board::{BOARD_SIZE, Board, Cell};
pub use lines::{LineAnalyzer, TARGET_SUM, WINNING_LINES, is_winning};
pub use outcome::{
    Outcome, REWARD_LOSE, REWARD_RESUME, REWARD_TIE, REWARD_WIN, RewardTable, is_terminal,
};
pub use transition::state_transition;
pub use values::{AllowedValues, Player, VALUE_RANGE, allowed_values};
