//! End-to-end session flows through the public interface.

use parity_tictactoe::{Cell, GameSession, GameState, Parity, Square};

/// Plays the session to a terminal state with a naive human who always
/// takes the first empty cell. Nine turns bound any game.
fn play_out(session: &mut GameSession) {
    for _ in 0..9 {
        if session.state() != GameState::HumanTurn {
            break;
        }
        let cell = Cell::ALL
            .iter()
            .copied()
            .find(|&cell| session.board().is_empty(cell))
            .expect("human turn implies an empty cell");
        session.submit_human_move(cell.row(), cell.col());
    }
}

#[test]
fn test_computer_never_loses_to_naive_play() {
    for seed in 0..10 {
        let mut session = GameSession::with_seed(seed);
        session.submit_parity_pick(Parity::Odd);
        play_out(&mut session);

        assert!(session.state().is_terminal(), "seed {seed} did not finish");
        assert_ne!(session.state(), GameState::HumanWon);
        assert_eq!(session.score().human_wins(), 0);
    }
}

#[test]
fn test_input_before_pick_is_ignored() {
    let mut session = GameSession::with_seed(3);

    session.submit_human_move(1, 1);
    session.request_reset();

    assert_eq!(session.state(), GameState::AwaitingParityPick);
    assert!(
        session
            .board()
            .squares()
            .iter()
            .all(|square| *square == Square::Empty)
    );
}

#[test]
fn test_reset_starts_fresh_game_keeping_score() {
    let mut session = GameSession::with_seed(5);
    session.submit_parity_pick(Parity::Even);
    play_out(&mut session);
    assert!(session.state().is_terminal());
    let score = session.score();

    session.request_reset();

    assert_eq!(session.state(), GameState::AwaitingParityPick);
    assert!(
        session
            .board()
            .squares()
            .iter()
            .all(|square| *square == Square::Empty)
    );
    assert_eq!(session.score(), score);

    // The next game runs through the same machine.
    session.submit_parity_pick(Parity::Odd);
    play_out(&mut session);
    assert!(session.state().is_terminal());
}

#[test]
fn test_snapshot_reflects_session() {
    let session = GameSession::with_seed(11);
    let snapshot = session.snapshot();

    assert_eq!(snapshot.state, session.state());
    assert_eq!(&snapshot.board, session.board());
    assert_eq!(snapshot.score, session.score());
    assert_eq!(snapshot.message, session.message());
}

#[test]
fn test_snapshot_serializes_for_shells() {
    let session = GameSession::with_seed(13);
    let value = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(value["state"], "AwaitingParityPick");
    assert_eq!(value["score"]["human_wins"], 0);
    assert_eq!(value["score"]["computer_wins"], 0);
    assert_eq!(value["board"]["squares"][0], "Empty");
    assert!(value["message"].as_str().unwrap().contains("Odd or Even"));
}
