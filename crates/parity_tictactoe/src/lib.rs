//! Single-player tic-tac-toe against a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`Cell`], [`rules`]): 3x3 grid storage
//!   with win and draw detection.
//! - **Search** ([`search`]): exhaustive minimax move selection for the
//!   computer.
//! - **Pregame** ([`pregame`]): the odd/even draw that decides who moves
//!   first.
//! - **Session** ([`GameSession`]): the turn-taking state machine tying
//!   the pieces together.
//!
//! A rendering shell drives a [`GameSession`] with discrete input events
//! and renders [`GameSession::snapshot`] on whatever schedule suits it;
//! the session performs no I/O of its own.
//!
//! # Example
//!
//! ```
//! use parity_tictactoe::{GameSession, GameState, Parity};
//!
//! let mut session = GameSession::with_seed(7);
//! session.submit_parity_pick(Parity::Odd);
//!
//! // Whoever won the draw, any computer opening has already been played.
//! assert_eq!(session.state(), GameState::HumanTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
pub mod pregame;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use cell::Cell;
pub use error::{PlaceError, SearchError};
pub use pregame::{Parity, PregameOutcome};
pub use session::{GameSession, GameSnapshot, GameState, Score};
pub use types::{Board, Player, Square};
