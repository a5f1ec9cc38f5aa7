//! Common test utilities for the fifteen test suite.
//!
//! Board generators driven by a seeded `StdRng`, used by the property-style
//! tests in place of a dedicated property-testing crate.

#![allow(dead_code)]

use fifteen::tictactoe::{BOARD_SIZE, Board, Cell};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Deterministic RNG for a test case
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Board with a random number of cells filled with distinct random values.
///
/// Parity is not respected, so boards need not be reachable in play; the
/// pure rule functions must hold for them anyway.
pub fn arbitrary_board(rng: &mut StdRng) -> Board {
    let filled = rng.random_range(0..=BOARD_SIZE);

    let mut positions: Vec<usize> = (0..BOARD_SIZE).collect();
    positions.shuffle(rng);
    let mut values: Vec<u8> = (1..=9).collect();
    values.shuffle(rng);

    let mut cells = [Cell::Empty; BOARD_SIZE];
    for (&pos, &value) in positions.iter().zip(values.iter()).take(filled) {
        cells[pos] = Cell::Filled(value);
    }
    Board::from_cells(cells).expect("distinct values in range always form a valid board")
}

/// Brute-force reference for the win check: any triple fully filled and
/// summing to 15, enumerated from all index combinations that form a line.
pub fn brute_force_winning(board: &Board) -> bool {
    let lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    lines.iter().any(|line| {
        let values: Vec<u8> = line.iter().filter_map(|&i| board.cells[i].value()).collect();
        values.len() == 3 && values.iter().map(|&v| v as u32).sum::<u32>() == 15
    })
}
