//! Error types for board and search operations.

use crate::cell::Cell;
use derive_more::{Display, Error};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Cell),
}

/// Errors that can occur during move selection.
///
/// Move selection is only meaningful on a live board; the turn coordinator
/// guarantees the precondition, so seeing this error is a programmer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The board is full or already decided.
    #[display("no legal moves: the board is full or already decided")]
    NoLegalMoves,
}
