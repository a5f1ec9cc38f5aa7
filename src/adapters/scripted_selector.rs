//! Replay of a fixed move list

use std::collections::VecDeque;

use crate::{
    Result,
    ports::ActionSelector,
    tictactoe::{Action, Board},
};

/// Plays back a predetermined sequence of actions.
///
/// Legality is not checked here; the environment rejects a scripted action
/// that is not in the current action space.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    name: String,
    script: VecDeque<Action>,
}

impl ScriptedSelector {
    /// Script of `(position, value)` pairs, played front to back
    pub fn new<I>(name: impl Into<String>, moves: I) -> Self
    where
        I: IntoIterator<Item = (usize, u8)>,
    {
        Self {
            name: name.into(),
            script: moves.into_iter().map(Action::from).collect(),
        }
    }

    /// Actions not yet played
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionSelector for ScriptedSelector {
    fn select_action(&mut self, _board: &Board, actions: &[Action]) -> Result<Action> {
        if actions.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        self.script
            .pop_front()
            .ok_or_else(|| crate::Error::ScriptExhausted {
                selector: self.name.clone(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
