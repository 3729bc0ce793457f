//! Rendering: board grid, status sidebar, history jump list.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

/// Draws the whole frame.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(38)])
        .split(outer[0]);

    board::render_board(f, columns[0], app.session());
    render_sidebar(f, columns[1], app);
    render_message(f, outer[1], app);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    let status = Paragraph::new(app.session().status().to_string())
        .style(Style::default().fg(Color::White));
    f.render_widget(status, rows[0]);

    history::render_history(f, rows[1], app);

    let help = Paragraph::new(
        "1-9 place  up/down select step\nenter rewind  s save\nr restart  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, rows[2]);
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let message = Paragraph::new(app.message()).style(Style::default().fg(Color::Gray));
    f.render_widget(message, area);
}
