//! salescast-tui - Terminal dashboard for the salescast forecasting library.

mod app;
mod event;
mod services;
mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use forecast_facade::ForecastConfig;
use ratatui::prelude::*;

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

fn main() -> anyhow::Result<()> {
    // Settle configuration before touching the terminal
    let config = ForecastConfig::from_env()?;
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw UI
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Clear expired status messages
        app.clear_expired_status();

        // Handle events
        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            handle_key_event(app, key);
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
