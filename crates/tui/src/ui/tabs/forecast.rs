//! Forecast tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use forecast_facade::{fill, format_amount, month_label, SeriesStore, TextKey};

use super::draw_placeholder;
use crate::app::App;
use crate::widgets::{create_comparison_chart, create_forecast_chart, to_points};

/// Draw the Forecast tab.
pub fn draw_forecast_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Controls
            Constraint::Min(10),    // Chart
            Constraint::Length(10), // Forecast table and monthly comparison
        ])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);

    draw_forecast_controls(frame, chunks[0], app);
    draw_forecast_chart_widget(frame, chunks[1], app);
    draw_forecast_table(frame, bottom[0], app);
    draw_monthly_comparison(frame, bottom[1], app);
}

fn draw_monthly_comparison(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.text(TextKey::MonthlyComparison);
    let Some(report) = app.session.latest() else {
        draw_placeholder(frame, area, title, "--");
        return;
    };

    let rows: Vec<(&str, f64)> = report
        .points
        .iter()
        .map(|p| (month_label(p.period), p.value))
        .collect();
    frame.render_widget(create_comparison_chart(&rows, title), area);
}

fn draw_forecast_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "[p] {}    Rows: {}    Horizon: {}",
        app.text(TextKey::GenerateForecast),
        app.session.store().len(),
        app.session.horizon()
    );

    let controls = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text(TextKey::SalesForecast))),
        );

    frame.render_widget(controls, area);
}

fn chart_title(app: &App) -> String {
    fill(
        app.text(TextKey::ForecastChart),
        &[("horizon", app.session.horizon().to_string().as_str())],
    )
}

fn draw_forecast_chart_widget(frame: &mut Frame, area: Rect, app: &App) {
    match app.session.latest() {
        Some(report) => {
            let historical = to_points(&app.session.store().values(), 0);
            let forecast: Vec<(f64, f64)> = report
                .points
                .iter()
                .map(|p| (p.period as f64, p.value))
                .collect();
            let chart = create_forecast_chart(
                &historical,
                &forecast,
                [app.text(TextKey::Historical), app.text(TextKey::Forecast)],
                chart_title(app),
            );
            frame.render_widget(chart, area);
        }
        None => draw_placeholder(
            frame,
            area,
            &chart_title(app),
            &format!("[p] {}", app.text(TextKey::GenerateForecast)),
        ),
    }
}

fn draw_forecast_table(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.session.latest() else {
        draw_placeholder(frame, area, app.text(TextKey::Forecast), "--");
        return;
    };

    let currency = app.text(TextKey::Currency);
    let rows: Vec<Row> = report
        .points
        .iter()
        .map(|p| {
            Row::new(vec![
                month_label(p.period).to_string(),
                format!("{} {}", format_amount(p.value), currency),
            ])
        })
        .collect();

    let header = Row::new(vec![app.text(TextKey::Month), app.text(TextKey::Forecast)])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(16)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.text(TextKey::Forecast))),
        );

    frame.render_widget(table, area);
}
