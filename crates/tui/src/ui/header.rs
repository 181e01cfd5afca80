//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use forecast_facade::TextKey;

use crate::app::App;

/// Draw the header bar with title and language.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(format!(
        "{}  |  {}: {} [g]",
        app.text(TextKey::AppTitle),
        app.text(TextKey::Language),
        app.language
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
