//! Uniform random move selection

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    ports::ActionSelector,
    tictactoe::{Action, Board},
};

/// Picks uniformly among the legal actions.
///
/// This is the env's default opponent. Seed it (or call
/// [`ActionSelector::set_rng_seed`]) for reproducible episodes.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    name: String,
    rng: StdRng,
}

impl RandomSelector {
    /// Create a random selector seeded from entropy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random selector with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ActionSelector for RandomSelector {
    fn select_action(&mut self, _board: &Board, actions: &[Action]) -> Result<Action> {
        let action = *actions
            .choose(&mut self.rng)
            .ok_or(crate::Error::NoValidMoves)?;
        tracing::trace!(selector = %self.name, %action, choices = actions.len(), "random pick");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::action_space;

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let actions: Vec<_> = action_space(&board).env_actions().collect();

        let mut a = RandomSelector::with_seed("a", 7);
        let mut b = RandomSelector::with_seed("b", 7);
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&board, &actions).unwrap(),
                b.select_action(&board, &actions).unwrap()
            );
        }
    }

    #[test]
    fn reseeding_restarts_the_sequence() {
        let board = Board::new();
        let actions: Vec<_> = action_space(&board).agent_actions().collect();

        let mut selector = RandomSelector::new("agent");
        selector.set_rng_seed(3).unwrap();
        let first: Vec<_> = (0..5)
            .map(|_| selector.select_action(&board, &actions).unwrap())
            .collect();
        selector.set_rng_seed(3).unwrap();
        let second: Vec<_> = (0..5)
            .map(|_| selector.select_action(&board, &actions).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn picks_only_listed_actions() {
        let board = Board::new();
        let actions = vec![Action::new(2, 4), Action::new(6, 8)];
        let mut selector = RandomSelector::with_seed("env", 11);
        for _ in 0..50 {
            let picked = selector.select_action(&board, &actions).unwrap();
            assert!(actions.contains(&picked));
        }
    }

    #[test]
    fn empty_list_is_an_error() {
        let mut selector = RandomSelector::with_seed("env", 0);
        let err = selector.select_action(&Board::new(), &[]).unwrap_err();
        assert!(matches!(err, crate::Error::NoValidMoves));
    }
}
