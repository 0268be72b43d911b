//! Screen layout and rendering.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Vanishing Tic-Tac-Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app.engine());

    let status = Paragraph::new(app.status_line()).alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    if let Some(hint) = app.hint() {
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);
    }

    let help = Paragraph::new("1-9: place  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}
