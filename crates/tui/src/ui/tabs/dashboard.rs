//! Dashboard tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use forecast_facade::{format_amount, SeriesStore, TextKey, TrendDirection};

use super::draw_placeholder;
use crate::app::App;
use crate::widgets::{create_sales_chart, to_points};

/// Draw the Dashboard tab.
pub fn draw_dashboard_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Metric cards
            Constraint::Min(10),   // Chart
        ])
        .split(area);

    draw_metric_cards(frame, chunks[0], app);
    draw_overview_chart(frame, chunks[1], app);
}

fn draw_metric_cards(frame: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let metrics = app.session.metrics();
    let currency = app.text(TextKey::Currency);
    let trend_color = match metrics.trend {
        TrendDirection::Increasing => Color::Green,
        TrendDirection::Decreasing => Color::Red,
        TrendDirection::Stable => Color::Yellow,
    };
    let fit_quality = match app.session.latest() {
        Some(report) => format!("{:.1}%", report.fit.r_squared * 100.0),
        None => app.text(TextKey::NotAvailable).to_string(),
    };

    let values = [
        (
            TextKey::TotalRevenue,
            format!("{} {}", format_amount(metrics.total), currency),
            Color::Cyan,
        ),
        (
            TextKey::AverageSales,
            format!("{} {}", format_amount(metrics.average), currency),
            Color::Cyan,
        ),
        (
            TextKey::Trend,
            app.language.direction(metrics.trend).to_string(),
            trend_color,
        ),
        (TextKey::FitQuality, fit_quality, Color::Magenta),
    ];

    for ((key, value, color), card) in values.into_iter().zip(cards.iter()) {
        let widget = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", app.text(key))));
        frame.render_widget(widget, *card);
    }
}

fn draw_overview_chart(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.text(TextKey::SalesOverview);
    let values = app.session.store().values();
    if values.is_empty() {
        draw_placeholder(frame, area, title, app.text(TextKey::NoData));
        return;
    }

    let points = to_points(&values, 0);
    let chart = create_sales_chart(&points, title, app.text(TextKey::Sales), Color::Cyan);
    frame.render_widget(chart, area);
}
