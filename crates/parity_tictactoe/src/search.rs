//! Exhaustive move selection for the computer opponent.
//!
//! The board is small enough to search to the end of the game, so no
//! pruning or depth limit is needed and the opponent plays perfectly.
//! Scoring is zero-sum from the computer's point of view: +1 for an
//! eventual computer win, -1 for an eventual human win, 0 for a draw,
//! evaluated at terminal boards only.

use crate::cell::Cell;
use crate::error::SearchError;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Selects the strongest cell for the computer on the given board.
///
/// Ties are broken toward the first candidate in row-major order, so the
/// selection is deterministic for any board. The search explores by placing
/// and removing marks in place; the board compares equal to its pre-call
/// state when this function returns.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMoves`] if the board is full or already
/// decided. The turn coordinator never invokes the search in those states.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board) -> Result<Cell, SearchError> {
    if check_winner(board).is_some() {
        return Err(SearchError::NoLegalMoves);
    }
    let candidates = Cell::empty_cells(board);
    if candidates.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut best: Option<(Cell, i32)> = None;
    for cell in candidates {
        board.set(cell, Square::Occupied(Player::Computer));
        let score = evaluate(board, Player::Human);
        board.clear(cell);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((cell, score));
        }
    }

    let (cell, score) = best.expect("candidate list was non-empty");
    debug!(%cell, score, "Selected computer move");
    Ok(cell)
}

/// Returns the game value with `to_move` to play, assuming perfect play
/// from both sides: +1 computer win, -1 human win, 0 draw.
///
/// Recursion stops at any decided or full board; with at most nine plies
/// the search always terminates.
pub fn evaluate(board: &mut Board, to_move: Player) -> i32 {
    if let Some(winner) = check_winner(board) {
        return match winner {
            Player::Computer => 1,
            Player::Human => -1,
        };
    }
    if is_full(board) {
        return 0;
    }

    let mut best = match to_move {
        Player::Computer => i32::MIN,
        Player::Human => i32::MAX,
    };
    for cell in Cell::empty_cells(board) {
        board.set(cell, Square::Occupied(to_move));
        let score = evaluate(board, to_move.opponent());
        board.clear(cell);
        best = match to_move {
            Player::Computer => best.max(score),
            Player::Human => best.min(score),
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, cell: Cell, player: Player) {
        board.place(cell, player).unwrap();
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        place(&mut board, Cell::TopLeft, Player::Computer);
        place(&mut board, Cell::TopCenter, Player::Computer);
        place(&mut board, Cell::MiddleLeft, Player::Human);
        place(&mut board, Cell::Center, Player::Human);

        assert_eq!(best_move(&mut board), Ok(Cell::TopRight));
    }

    #[test]
    fn test_blocks_open_line() {
        let mut board = Board::new();
        // Human threatens the top row; the computer holds only the center,
        // so blocking is the single move that does not lose outright.
        place(&mut board, Cell::TopLeft, Player::Human);
        place(&mut board, Cell::TopCenter, Player::Human);
        place(&mut board, Cell::Center, Player::Computer);

        assert_eq!(best_move(&mut board), Ok(Cell::TopRight));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new();
        // X O X / O X X / O X O, a drawn board.
        let layout = [
            Player::Human,
            Player::Computer,
            Player::Human,
            Player::Computer,
            Player::Human,
            Player::Human,
            Player::Computer,
            Player::Human,
            Player::Computer,
        ];
        for (cell, player) in Cell::ALL.into_iter().zip(layout) {
            place(&mut board, cell, player);
        }

        assert_eq!(best_move(&mut board), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_decided_board_has_no_moves() {
        let mut board = Board::new();
        place(&mut board, Cell::TopLeft, Player::Computer);
        place(&mut board, Cell::TopCenter, Player::Computer);
        place(&mut board, Cell::TopRight, Player::Computer);
        place(&mut board, Cell::MiddleLeft, Player::Human);
        place(&mut board, Cell::Center, Player::Human);

        assert_eq!(best_move(&mut board), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_lost_position_evaluates_negative() {
        let mut board = Board::new();
        // Human holds two open threats; computer to move cannot stop both.
        place(&mut board, Cell::TopLeft, Player::Human);
        place(&mut board, Cell::TopCenter, Player::Human);
        place(&mut board, Cell::MiddleLeft, Player::Human);
        place(&mut board, Cell::Center, Player::Computer);

        assert_eq!(evaluate(&mut board, Player::Computer), -1);
    }
}
