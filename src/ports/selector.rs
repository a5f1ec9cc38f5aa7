//! Selector port - abstraction for choosing a move
//!
//! The environment never hard-wires its randomness: the env's reply is picked
//! by whatever [`ActionSelector`] was injected at construction. The same port
//! drives the agent side when the episode pipeline plays on a caller's behalf.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Strategy that picks one action out of a legal list
///
/// # Examples
///
/// ```no_run
/// use fifteen::{
///     Result,
///     ports::ActionSelector,
///     tictactoe::{Action, Board},
/// };
///
/// struct FirstLegal;
///
/// impl ActionSelector for FirstLegal {
///     fn select_action(&mut self, _board: &Board, actions: &[Action]) -> Result<Action> {
///         actions.first().copied().ok_or(fifteen::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-legal"
///     }
/// }
/// ```
pub trait ActionSelector: Send {
    /// Choose one of `actions` for `board`.
    ///
    /// `actions` is the acting player's full action space in position-major,
    /// value-minor order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when `actions` is empty.
    fn select_action(&mut self, board: &Board, actions: &[Action]) -> Result<Action>;

    /// Get the selector's name.
    ///
    /// Used for logging and summaries.
    fn name(&self) -> &str;

    /// Seed the selector's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`, suitable for deterministic selectors.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

impl<S: ActionSelector + ?Sized> ActionSelector for Box<S> {
    fn select_action(&mut self, board: &Board, actions: &[Action]) -> Result<Action> {
        (**self).select_action(board, actions)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        (**self).set_rng_seed(seed)
    }
}
