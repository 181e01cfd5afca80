//! Application state management for the TUI.

use std::path::PathBuf;
use std::time::Instant;

use forecast_facade::{
    fill, format_amount, DashboardSession, ForecastConfig, ForecastError, InMemorySeriesStore,
    Language, NoiseSource, TextKey,
};

use crate::services::{load_sales_file, save_csv};

/// File written by the export action.
pub const DEFAULT_EXPORT_PATH: &str = "sales_data.csv";

/// Main application state.
pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Text typed in the current prompt
    pub input: String,
    /// Label entered before the value prompt
    pub pending_label: Option<String>,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// Display language
    pub language: Language,
    /// Sales table and latest forecast
    pub session: DashboardSession,
    /// Where `e` writes the table
    pub export_path: PathBuf,
    /// Last file loaded with `d`
    pub source_path: Option<PathBuf>,
    noise: Box<dyn NoiseSource + Send>,
}

impl App {
    /// Start with the built-in sample table.
    pub fn new(config: &ForecastConfig) -> forecast_facade::Result<Self> {
        let session = DashboardSession::new(InMemorySeriesStore::with_sample_data(), config)?;
        Ok(Self {
            current_tab: Tab::default(),
            should_quit: false,
            input_mode: InputMode::Normal,
            input: String::new(),
            pending_label: None,
            status_message: None,
            language: Language::default(),
            session,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            source_path: None,
            noise: config.noise(),
        })
    }

    #[cfg(test)]
    pub fn with_noise(mut self, noise: Box<dyn NoiseSource + Send>) -> Self {
        self.noise = noise;
        self
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.language.text(key)
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Move to previous tab.
    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-4).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.set_status(format!("{}: {}", self.text(TextKey::Language), self.language));
    }

    /// Run a fresh forecast. A failure leaves the previous one in place.
    pub fn generate_forecast(&mut self) {
        let result = self
            .session
            .generate_forecast(self.noise.as_mut())
            .map(|_| ());
        let message = match result {
            Ok(()) => self.text(TextKey::ForecastGenerated).to_string(),
            Err(ForecastError::InsufficientData { required, .. }) => fill(
                self.text(TextKey::NeedMoreData),
                &[("required", required.to_string().as_str())],
            ),
            Err(e) => e.to_string(),
        };
        self.set_status(message);
    }

    /// Open the label prompt of the add-row form.
    pub fn start_add(&mut self) {
        self.current_tab = Tab::Data;
        self.input.clear();
        self.pending_label = None;
        self.input_mode = InputMode::Label;
    }

    /// Open the file path prompt.
    pub fn start_load(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::FileDialog;
        self.set_status("Enter file path to load...");
    }

    /// Leave any prompt without changes.
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.pending_label = None;
        self.input_mode = InputMode::Normal;
        self.set_status("Cancelled.");
    }

    /// Confirm the current prompt.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match self.input_mode {
            InputMode::Normal => {}
            InputMode::Label => {
                let label = text.trim();
                if label.is_empty() {
                    self.set_status(format!("{} is required.", self.text(TextKey::Month)));
                } else {
                    self.pending_label = Some(label.to_string());
                    self.input_mode = InputMode::Value;
                }
            }
            InputMode::Value => match text.trim().parse::<f64>() {
                Ok(value) => {
                    let label = self.pending_label.take().unwrap_or_default();
                    match self.session.append(label.clone(), value) {
                        Ok(_) => {
                            self.set_status(format!("Added {}: {}", label, format_amount(value)))
                        }
                        Err(e) => self.set_status(e.to_string()),
                    }
                    self.input_mode = InputMode::Normal;
                }
                Err(_) => {
                    self.input = text;
                    self.set_status(format!("Invalid {}.", self.text(TextKey::Sales)));
                }
            },
            InputMode::FileDialog => {
                self.input_mode = InputMode::Normal;
                self.load_file(text.trim());
            }
        }
    }

    fn load_file(&mut self, path: &str) {
        let path = PathBuf::from(path);
        let result = load_sales_file(&path)
            .map_err(anyhow::Error::from)
            .and_then(|records| Ok(self.session.replace_records(records)?));
        match result {
            Ok(()) => {
                self.set_status(format!(
                    "Loaded {} rows from {}",
                    self.session.records().len(),
                    path.display()
                ));
                self.source_path = Some(path);
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Drop every row and the latest forecast.
    pub fn clear_data(&mut self) {
        self.session.clear();
        self.set_status(self.text(TextKey::ClearButton));
    }

    /// Write the table as CSV to `export_path`.
    pub fn export_data(&mut self) {
        let result = self
            .session
            .export_csv()
            .map_err(anyhow::Error::from)
            .and_then(|csv| Ok(save_csv(&self.export_path, &csv)?));
        match result {
            Ok(()) => self.set_status(format!(
                "{}: {}",
                self.text(TextKey::ExportData),
                self.export_path.display()
            )),
            Err(e) => self.set_status(e.to_string()),
        }
    }
}

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Forecast,
    Insights,
    Data,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Forecast,
            Tab::Forecast => Tab::Insights,
            Tab::Insights => Tab::Data,
            Tab::Data => Tab::Dashboard,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Data,
            Tab::Forecast => Tab::Dashboard,
            Tab::Insights => Tab::Forecast,
            Tab::Data => Tab::Insights,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            2 => Tab::Forecast,
            3 => Tab::Insights,
            4 => Tab::Data,
            _ => Tab::Dashboard,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Forecast => 1,
            Tab::Insights => 2,
            Tab::Data => 3,
        }
    }

    pub fn title_key(self) -> TextKey {
        match self {
            Tab::Dashboard => TextKey::Dashboard,
            Tab::Forecast => TextKey::SalesForecast,
            Tab::Insights => TextKey::AiInsights,
            Tab::Data => TextKey::DataManagement,
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Forecast, Tab::Insights, Tab::Data]
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Add-row form, month label prompt
    Label,
    /// Add-row form, sales amount prompt
    Value,
    FileDialog,
}
