//! Winning line analysis

use super::board::Board;

/// Sum a completed line must reach to win
pub const TARGET_SUM: u8 = 15;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Sum of a line, or `None` if any of its cells is empty.
    pub fn line_sum(board: &Board, line: &[usize; 3]) -> Option<u8> {
        line.iter()
            .map(|&idx| board.cells[idx].value())
            .sum::<Option<u8>>()
    }

    /// Whether the line is fully occupied and sums to exactly [`TARGET_SUM`]
    pub fn is_winning_line(board: &Board, line: &[usize; 3]) -> bool {
        Self::line_sum(board, line) == Some(TARGET_SUM)
    }

    /// All winning lines currently on the board
    pub fn winning_lines(board: &Board) -> Vec<[usize; 3]> {
        WINNING_LINES
            .iter()
            .filter(|line| Self::is_winning_line(board, line))
            .copied()
            .collect()
    }
}

/// True iff any row, column or diagonal is complete and sums to 15.
///
/// Lines with an empty cell are skipped outright; they are never treated as
/// partial sums.
pub fn is_winning(board: &Board) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| LineAnalyzer::is_winning_line(board, line))
}
