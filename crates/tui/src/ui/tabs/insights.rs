//! Insights tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use forecast_facade::{Recommendation, TextKey};

use super::draw_placeholder;
use crate::app::App;

/// Draw the Insights tab.
pub fn draw_insights_tab(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.text(TextKey::InsightTitle);
    let latest = app.session.latest();
    let lines = app.session.insight_lines(app.language);
    let (Some(report), Some(lines)) = (latest, lines) else {
        draw_placeholder(frame, area, title, app.text(TextKey::GenerateFirst));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Trend, next value, change
            Constraint::Min(4),    // Recommendations
        ])
        .split(area);

    let alignment = if app.language.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let accent = match report.insight.recommendation() {
        Recommendation::Growth => Color::Green,
        Recommendation::Retention => Color::Yellow,
    };

    let (summary, advice) = lines.split_at(lines.len().min(3));

    let summary = Paragraph::new(
        summary
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect::<Vec<_>>(),
    )
    .alignment(alignment)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));
    frame.render_widget(summary, chunks[0]);

    let advice = Paragraph::new(
        advice
            .iter()
            .map(|l| Line::from(l.as_str()).style(Style::default().fg(accent)))
            .collect::<Vec<_>>(),
    )
    .alignment(alignment)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.text(TextKey::Recommendations))),
    );
    frame.render_widget(advice, chunks[1]);
}
