//! Board representation and text parsing

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the 3x3 board
pub const BOARD_SIZE: usize = 9;

/// A cell on the board: either empty or holding one of the values 1-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(u8),
}

impl Cell {
    /// The value in this cell, if any
    pub fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Filled(v) => Some(v),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(v) => char::from(b'0' + v),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            '1'..='9' => c.to_digit(10).map(|d| Cell::Filled(d as u8)),
            _ => None,
        }
    }
}

/// The 3x3 board, indexed 0-8 in row-major order.
///
/// `Board` is `Copy` (9 small cells), which lets the environment stage a full
/// turn on a scratch copy and commit it only when both half-moves succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from cells, rejecting out-of-range or repeated values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidValue`] for values outside 1-9 and
    /// [`crate::Error::DuplicateValue`] when a value appears twice.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Result<Self, crate::Error> {
        let mut seen = [false; BOARD_SIZE + 1];
        for value in cells.iter().filter_map(|c| c.value()) {
            if !(1..=9).contains(&value) {
                return Err(crate::Error::InvalidValue { value });
            }
            if seen[value as usize] {
                return Err(crate::Error::DuplicateValue { value });
            }
            seen[value as usize] = true;
        }
        Ok(Board { cells })
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored. The remaining text must hold exactly 9 symbols:
    /// digits `1`-`9` for filled cells and `.`, `_` or `-` for empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("1 2 3  4 . .  . . .").unwrap();
    /// assert_eq!(board.get(3), Cell::Filled(4));
    /// assert!(board.is_empty(4));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the length is not 9, any character is invalid, or a
    /// value is repeated.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Compact 9-character encoding, e.g. `"1234....."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos].is_empty()
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Values currently on the board, in cell order
    pub fn used_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|c| c.value())
    }

    pub fn contains_value(&self, value: u8) -> bool {
        self.used_values().any(|v| v == value)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 {
                if i < 8 {
                    writeln!(f)?;
                }
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
