//! Actions and action-space enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::Board,
    values::{AllowedValues, Player, allowed_values},
};

/// Place `value` into the cell at `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub position: usize,
    pub value: u8,
}

impl Action {
    pub fn new(position: usize, value: u8) -> Self {
        Action { position, value }
    }
}

impl From<(usize, u8)> for Action {
    fn from((position, value): (usize, u8)) -> Self {
        Action { position, value }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}

/// Indices of empty cells, ascending
pub fn allowed_positions(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, cell)| cell.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Legal actions for both players on one board.
///
/// Built from a snapshot of the board; the per-player sequences are produced
/// lazily and can be iterated any number of times. Order is position-major,
/// value-minor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    positions: Vec<usize>,
    values: AllowedValues,
}

impl ActionSpace {
    pub fn new(board: &Board) -> Self {
        ActionSpace {
            positions: allowed_positions(board),
            values: allowed_values(board),
        }
    }

    /// Cartesian product of allowed positions with the player's values
    pub fn actions(&self, player: Player) -> impl Iterator<Item = Action> + '_ {
        let values = self.values.for_player(player);
        self.positions
            .iter()
            .flat_map(move |&position| values.iter().map(move |&value| Action { position, value }))
    }

    pub fn agent_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions(Player::Agent)
    }

    pub fn env_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions(Player::Env)
    }

    /// Membership test without materializing the product
    pub fn contains(&self, player: Player, action: Action) -> bool {
        self.positions.contains(&action.position)
            && self.values.for_player(player).contains(&action.value)
    }

    pub fn len(&self, player: Player) -> usize {
        self.positions.len() * self.values.for_player(player).len()
    }

    pub fn is_empty(&self, player: Player) -> bool {
        self.len(player) == 0
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn values(&self) -> &AllowedValues {
        &self.values
    }
}

/// Agent and env action spaces for `board`
pub fn action_space(board: &Board) -> ActionSpace {
    ActionSpace::new(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_positions_lists_empty_cells_ascending() {
        let board = Board::from_string("1.3.5.7.9").unwrap();
        assert_eq!(allowed_positions(&board), vec![1, 3, 5, 7]);
    }

    #[test]
    fn empty_board_action_space_sizes() {
        let space = action_space(&Board::new());
        assert_eq!(space.len(Player::Agent), 9 * 5);
        assert_eq!(space.len(Player::Env), 9 * 4);
        assert_eq!(space.agent_actions().count(), 45);
        assert_eq!(space.env_actions().count(), 36);
    }

    #[test]
    fn actions_are_position_major_value_minor() {
        let board = Board::from_string("12345.7.9").unwrap();
        let space = action_space(&board);
        let agent: Vec<_> = space.agent_actions().collect();
        assert!(agent.is_empty(), "all odd values are used");

        let env: Vec<_> = space.env_actions().collect();
        assert_eq!(
            env,
            vec![
                Action::new(5, 6),
                Action::new(5, 8),
                Action::new(7, 6),
                Action::new(7, 8),
            ]
        );
    }

    #[test]
    fn space_can_be_iterated_repeatedly() {
        let space = action_space(&Board::from_string("1........").unwrap());
        let first: Vec<_> = space.agent_actions().collect();
        let second: Vec<_> = space.agent_actions().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Action::new(1, 3));
    }

    #[test]
    fn contains_matches_enumeration() {
        let board = Board::from_string("1234.....").unwrap();
        let space = action_space(&board);
        for action in space.agent_actions() {
            assert!(space.contains(Player::Agent, action));
            assert!(!space.contains(Player::Env, action));
        }
        assert!(!space.contains(Player::Agent, Action::new(0, 5)));
        assert!(!space.contains(Player::Agent, Action::new(4, 1)));
        assert!(!space.contains(Player::Agent, Action::new(9, 5)));
    }
}
