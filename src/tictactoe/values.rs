//! Players and the shared 1-9 value pool

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Every value that can be placed during a game
pub const VALUE_RANGE: RangeInclusive<u8> = 1..=9;

/// A participant in the game
///
/// The agent moves first and owns the odd values; the env answers with even
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Agent,
    Env,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Agent => Player::Env,
            Player::Env => Player::Agent,
        }
    }

    /// Whether `value` belongs to this player's pool (ignoring what is used)
    pub fn owns(self, value: u8) -> bool {
        VALUE_RANGE.contains(&value)
            && match self {
                Player::Agent => value % 2 == 1,
                Player::Env => value % 2 == 0,
            }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::Agent => "agent",
            Player::Env => "env",
        }
    }
}

/// Unused values split by owner, each in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValues {
    pub agent: Vec<u8>,
    pub env: Vec<u8>,
}

impl AllowedValues {
    pub fn for_player(&self, player: Player) -> &[u8] {
        match player {
            Player::Agent => &self.agent,
            Player::Env => &self.env,
        }
    }
}

/// Values not yet on the board: unused odds for the agent, unused evens for
/// the env.
pub fn allowed_values(board: &Board) -> AllowedValues {
    let mut used = [false; 10];
    for value in board.used_values() {
        if let Some(slot) = used.get_mut(value as usize) {
            *slot = true;
        }
    }

    let unused = |player: Player| -> Vec<u8> {
        VALUE_RANGE
            .filter(|&v| player.owns(v) && !used[v as usize])
            .collect()
    };

    AllowedValues {
        agent: unused(Player::Agent),
        env: unused(Player::Env),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_offers_full_pools() {
        let values = allowed_values(&Board::new());
        assert_eq!(values.agent, vec![1, 3, 5, 7, 9]);
        assert_eq!(values.env, vec![2, 4, 6, 8]);
    }

    #[test]
    fn used_values_leave_the_pools() {
        let board = Board::from_string("1234.....").unwrap();
        let values = allowed_values(&board);
        assert_eq!(values.agent, vec![5, 7, 9]);
        assert_eq!(values.env, vec![6, 8]);
        assert_eq!(values.for_player(Player::Env), &[6, 8]);
    }

    #[test]
    fn ownership_by_parity() {
        assert!(Player::Agent.owns(9));
        assert!(!Player::Agent.owns(8));
        assert!(Player::Env.owns(2));
        assert!(!Player::Env.owns(0));
        assert!(!Player::Agent.owns(11));
    }

    #[test]
    fn opponent_swaps() {
        assert_eq!(Player::Agent.opponent(), Player::Env);
        assert_eq!(Player::Env.opponent(), Player::Agent);
    }
}
