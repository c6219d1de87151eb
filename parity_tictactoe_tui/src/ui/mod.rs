//! Frame rendering: board, status message, score line.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draws one frame from the current session snapshot.
pub fn draw(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    board::render_board(f, chunks[0], &snapshot.board);

    let message = Paragraph::new(snapshot.message.as_str())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .alignment(Alignment::Center);
    f.render_widget(message, chunks[1]);

    let score = Paragraph::new(format!(
        "You: {}  Computer: {}  |  O/E pick parity, 1-9 place, R restart, Q quit",
        snapshot.score.human_wins(),
        snapshot.score.computer_wins()
    ))
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);
}
