//! Draw detection logic.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is drawn: board full with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
