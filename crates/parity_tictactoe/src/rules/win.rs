//! Win detection logic.

use crate::cell::Cell;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that side has three in a row, column, or
/// diagonal. On any reachable board at most one side can hold a line, so
/// check order does not matter.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
        // Columns
        [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
        [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
        [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
        // Diagonals
        [Cell::TopLeft, Cell::Center, Cell::BottomRight],
        [Cell::TopRight, Cell::Center, Cell::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
