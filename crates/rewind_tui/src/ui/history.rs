//! History jump-list rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the jump list, one row per history entry.
///
/// The active step is bold; the cursor row is highlighted. Enter jumps
/// to the cursor row.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let current = app.session().current_step();
    let items: Vec<ListItem> = app
        .session()
        .descriptors()
        .map(|descriptor| {
            let style = if descriptor.step() == current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::styled(descriptor.to_string(), style))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}
