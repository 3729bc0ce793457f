//! Board grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use rewind_tictactoe::{GameSession, Mark, MoveDescriptor, Position, Square};

/// Renders the active board, with the square filled by the active step's
/// ply rendered in reverse video.
pub fn render_board(f: &mut Frame, area: Rect, session: &GameSession) {
    let last_move = match session.move_descriptor(session.current_step()) {
        Some(MoveDescriptor::Placed { position, .. }) => Some(position),
        _ => None,
    };

    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], session, last_move, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], session, last_move, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], session, last_move, 6);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    session: &GameSession,
    last_move: Option<Position>,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    render_square(f, cols[0], session, last_move, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], session, last_move, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], session, last_move, start + 2);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    session: &GameSession,
    last_move: Option<Position>,
    index: usize,
) {
    let pos = Position::from_index(index).expect("grid indexes 0-8");
    let (text, mut style) = match session.board().get(pos) {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if last_move == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the middle line of the 3-row cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
