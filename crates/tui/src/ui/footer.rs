//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.input_mode {
        InputMode::FileDialog => "Enter file path | Esc: Cancel".to_string(),
        InputMode::Label | InputMode::Value => "Enter: Confirm | Esc: Cancel".to_string(),
        InputMode::Normal => {
            "[p] Forecast  [a] Add  [c] Clear  [e] Export  [d] Load  [g] Language  |  [1-4] Tab  [Tab/←→] Navigate  [q] Quit"
                .to_string()
        }
    };

    // Add status message if present
    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text)
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
