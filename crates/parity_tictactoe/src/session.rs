//! Game session management: the turn-taking state machine.

use crate::cell::Cell;
use crate::pregame::{self, Parity};
use crate::rules::{check_winner, is_full};
use crate::search;
use crate::types::{Board, Player};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Prompt shown while waiting for the pregame pick.
const PICK_PROMPT: &str = "Pick Odd or Even (O/E)";

/// Phase of the session state machine.
///
/// The win and draw phases are terminal: the session ignores everything
/// but a reset until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the human's odd/even call.
    AwaitingParityPick,
    /// Human to move.
    HumanTurn,
    /// Computer to move. Entered programmatically and resolved before the
    /// triggering call returns, so shells never observe it in a snapshot.
    ComputerTurn,
    /// Terminal: the human completed a line.
    HumanWon,
    /// Terminal: the computer completed a line.
    ComputerWon,
    /// Terminal: board full with no winner.
    Draw,
}

impl GameState {
    /// True for states that end a game (exited only by reset).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::HumanWon | GameState::ComputerWon | GameState::Draw
        )
    }
}

/// Within-session win tally.
///
/// Counters never decrease and survive game resets; only a process
/// restart clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    human_wins: u32,
    computer_wins: u32,
}

impl Score {
    /// Games the human has won this session.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Games the computer has won this session.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }
}

/// Point-in-time view of a session for a rendering shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current phase.
    pub state: GameState,
    /// Copy of the board.
    pub board: Board,
    /// Session score.
    pub score: Score,
    /// One-line status message for display.
    pub message: String,
}

/// A single-player game session: board, phase, score, and status message.
///
/// The session owns every piece of game state and is its only mutator.
/// Each call runs one logical turn to completion; when a human move leaves
/// the game open, the computer's reply resolves synchronously before the
/// call returns. Shells drive the session with discrete input events and
/// render [`GameSession::snapshot`] on their own schedule.
///
/// Invalid input (a move on an occupied cell, a pick or reset in the wrong
/// phase) is logged and ignored without a state change; the session never
/// surfaces an error to the end user.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: GameState,
    score: Score,
    message: String,
    rng: SmallRng,
}

impl GameSession {
    /// Creates a session awaiting the pregame pick.
    #[instrument]
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Creates a session with a deterministic RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            state: GameState::AwaitingParityPick,
            score: Score::default(),
            message: PICK_PROMPT.to_string(),
            rng,
        }
    }

    /// Current phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a snapshot for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            board: self.board.clone(),
            score: self.score,
            message: self.message.clone(),
        }
    }

    /// Submits the human's odd/even call.
    ///
    /// Runs the pregame and starts the game; if the computer is awarded
    /// the first move, its opening move is played before this call
    /// returns. Picks arriving outside [`GameState::AwaitingParityPick`]
    /// are ignored.
    #[instrument(skip(self))]
    pub fn submit_parity_pick(&mut self, pick: Parity) {
        if self.state != GameState::AwaitingParityPick {
            warn!(state = ?self.state, "Parity pick outside pregame ignored");
            return;
        }

        let outcome = pregame::run_parity_draw(pick, &mut self.rng);
        info!(
            human_roll = outcome.human_roll,
            computer_roll = outcome.computer_roll,
            parity = %outcome.total_parity,
            starter = %outcome.first_to_move,
            "Pregame resolved"
        );
        self.message = format!(
            "You:{} Computer:{} = {}. {} starts",
            outcome.human_roll, outcome.computer_roll, outcome.total_parity, outcome.first_to_move
        );

        match outcome.first_to_move {
            Player::Human => self.state = GameState::HumanTurn,
            Player::Computer => {
                self.state = GameState::ComputerTurn;
                self.run_computer_turn();
            }
        }
    }

    /// Submits a human move at (row, col), both in [0,2].
    ///
    /// Out-of-range coordinates, occupied cells, and moves outside
    /// [`GameState::HumanTurn`] are ignored without a state change. A
    /// legal move is applied, checked for a terminal result, and answered
    /// by the computer before this call returns.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) {
        if self.state != GameState::HumanTurn {
            warn!(state = ?self.state, row, col, "Move outside human turn ignored");
            return;
        }
        let Some(cell) = Cell::from_coords(row, col) else {
            warn!(row, col, "Out-of-range move ignored");
            return;
        };
        if let Err(error) = self.board.place(cell, Player::Human) {
            warn!(%cell, %error, "Illegal move ignored");
            return;
        }
        debug!(%cell, board = %self.board.display(), "Human move applied");

        if self.settle() {
            return;
        }
        self.state = GameState::ComputerTurn;
        self.run_computer_turn();
    }

    /// Starts a new game after a win or draw.
    ///
    /// Clears the board and returns to the pregame. The score carries
    /// over; reset requests mid-game are ignored.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        if !self.state.is_terminal() {
            warn!(state = ?self.state, "Reset outside a terminal state ignored");
            return;
        }
        info!(score = ?self.score, "Resetting for a new game");
        self.board.reset();
        self.state = GameState::AwaitingParityPick;
        self.message = PICK_PROMPT.to_string();
    }

    /// Plays the computer's move. The state machine guarantees the board
    /// is neither full nor decided on entry.
    fn run_computer_turn(&mut self) {
        debug_assert_eq!(self.state, GameState::ComputerTurn);
        let cell = search::best_move(&mut self.board)
            .expect("computer turn entered on a finished board");
        self.board
            .place(cell, Player::Computer)
            .expect("search selected an occupied cell");
        debug!(%cell, board = %self.board.display(), "Computer move applied");

        if !self.settle() {
            self.state = GameState::HumanTurn;
        }
    }

    /// Applies the terminal transition after a move, if any, crediting the
    /// score exactly once on entry. Returns true if the game ended.
    fn settle(&mut self) -> bool {
        if let Some(winner) = check_winner(&self.board) {
            match winner {
                Player::Human => {
                    self.score.human_wins += 1;
                    self.state = GameState::HumanWon;
                    self.message = "You win! Press R for a new game".to_string();
                }
                Player::Computer => {
                    self.score.computer_wins += 1;
                    self.state = GameState::ComputerWon;
                    self.message = "Computer wins! Press R for a new game".to_string();
                }
            }
            info!(%winner, score = ?self.score, "Game over");
            return true;
        }
        if is_full(&self.board) {
            self.state = GameState::Draw;
            self.message = "Draw! Press R for a new game".to_string();
            info!("Game drawn");
            return true;
        }
        false
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
