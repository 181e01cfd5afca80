//! Tab-specific UI modules.

mod dashboard;
mod data;
mod forecast;
mod insights;

pub use dashboard::draw_dashboard_tab;
pub use data::draw_data_tab;
pub use forecast::draw_forecast_tab;
pub use insights::draw_insights_tab;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Bordered panel with a centered hint.
pub(crate) fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));
    frame.render_widget(placeholder, area);
}
