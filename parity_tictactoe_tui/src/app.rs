//! Application state and input routing.

use crossterm::event::KeyCode;
use parity_tictactoe::{Cell, GameSession, GameSnapshot, Parity};
use tracing::debug;

/// Main application state: one game session plus key routing.
///
/// All game logic lives in the session; the app only translates key
/// presses into session calls and hands snapshots to the renderer.
pub struct App {
    session: GameSession,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Snapshot of the session for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Routes a key press. Returns true when the app should quit.
    ///
    /// The session ignores input that is invalid for its current phase,
    /// so keys are forwarded without any game logic here.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        debug!(?code, "Key pressed");
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.session.submit_parity_pick(Parity::Odd);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.session.submit_parity_pick(Parity::Even);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.request_reset(),
            KeyCode::Char(c @ '1'..='9') => {
                // On-screen digits are one-based in row-major order.
                let index = c as usize - '1' as usize;
                if let Some(cell) = Cell::from_index(index) {
                    self.session.submit_human_move(cell.row(), cell.col());
                }
            }
            _ => {}
        }
        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
