//! Applying a single placement to a board

use super::{
    action::Action,
    board::{BOARD_SIZE, Board, Cell},
    values::VALUE_RANGE,
};

/// Place `action.value` at `action.position`, mutating `board` in place.
///
/// Player pools are not checked here; that belongs to the caller (see
/// [`crate::Environment::step`]). The board invariants are still guarded, and
/// on error the board is left untouched.
///
/// # Examples
///
/// ```
/// use fifteen::tictactoe::{Action, Board, state_transition};
///
/// let mut board = Board::from_string("1234.....").unwrap();
/// state_transition(&mut board, Action::new(7, 9)).unwrap();
/// assert_eq!(board.encode(), "1234...9.");
/// ```
///
/// # Errors
///
/// - [`crate::Error::InvalidPosition`] if the position is outside 0-8
/// - [`crate::Error::InvalidMove`] if the cell is occupied
/// - [`crate::Error::InvalidValue`] if the value is outside 1-9
/// - [`crate::Error::DuplicateValue`] if the value is already on the board
pub fn state_transition(board: &mut Board, action: Action) -> Result<&mut Board, crate::Error> {
    let Action { position, value } = action;

    if position >= BOARD_SIZE {
        return Err(crate::Error::InvalidPosition { position });
    }
    if !board.is_empty(position) {
        return Err(crate::Error::InvalidMove { position });
    }
    if !VALUE_RANGE.contains(&value) {
        return Err(crate::Error::InvalidValue { value });
    }
    if board.contains_value(value) {
        return Err(crate::Error::DuplicateValue { value });
    }

    board.cells[position] = Cell::Filled(value);
    Ok(board)
}
