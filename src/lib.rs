//! Numeric Tic-Tac-Toe as a reinforcement-learning environment
//!
//! The agent places odd values (1, 3, 5, 7, 9), the env answers with even
//! values (2, 4, 6, 8), and any complete row, column or diagonal summing to
//! 15 ends the game.
//!
//! This crate provides:
//! - Pure rule functions over a [`tictactoe::Board`]
//! - The [`Environment`] turn state machine with rewards
//! - Injectable move strategies ([`ports::ActionSelector`])
//! - An episode runner with observers and a small CLI

pub mod adapters;
pub mod app;
pub mod cli;
pub mod environment;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use environment::{Environment, StepResult};
pub use error::{Error, Result};
pub use tictactoe::{Action, Board, Cell, Outcome, Player, RewardTable};
