//! Data tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use forecast_facade::{format_amount, TextKey};

use super::draw_placeholder;
use crate::app::{App, InputMode};

/// Draw the Data tab.
pub fn draw_data_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add form / source info
            Constraint::Min(6),    // Table
        ])
        .split(area);

    draw_input_form(frame, chunks[0], app);
    draw_data_table(frame, chunks[1], app);
}

fn draw_input_form(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.input_mode {
        InputMode::Label => (
            format!("{}: {}_", app.text(TextKey::Month), app.input),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Value => (
            format!(
                "{}: {}    {}: {}_",
                app.text(TextKey::Month),
                app.pending_label.as_deref().unwrap_or_default(),
                app.text(TextKey::Sales),
                app.input
            ),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::FileDialog => (
            format!("Path: {}_", app.input),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => {
            let source = app
                .source_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in sample".to_string());
            (
                format!(
                    "[a] {}  [c] {}  [e] {}  [d] Load file    Source: {}",
                    app.text(TextKey::AddButton),
                    app.text(TextKey::ClearButton),
                    app.text(TextKey::ExportData),
                    source
                ),
                Style::default().fg(Color::White),
            )
        }
    };

    let form = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.text(TextKey::AddData))),
    );
    frame.render_widget(form, area);
}

fn draw_data_table(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.text(TextKey::CurrentData);
    let records = app.session.records();
    if records.is_empty() {
        draw_placeholder(frame, area, title, app.text(TextKey::NoData));
        return;
    }

    let rows: Vec<Row> = records
        .iter()
        .map(|r| Row::new(vec![r.label.clone(), format_amount(r.value)]))
        .collect();

    let header = Row::new(vec![app.text(TextKey::Month), app.text(TextKey::Sales)])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(16)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", title, records.len())),
        );
    frame.render_widget(table, area);
}
