//! # salescast-cli
//!
//! Command-line interface for the salescast forecasting library.

use clap::{Parser, Subcommand};
use forecast_facade::{
    format_amount, load_file, month_label, render_insight, DashboardSession, ForecastConfig,
    ForecastPoint, ForecastReport, InMemorySeriesStore, Language, NoiseSource, ZeroNoise,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "salescast")]
#[command(about = "Sales trend forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a trend and project future sales
    Forecast {
        /// Input file (CSV or JSON); the built-in sample table when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of periods to forecast
        #[arg(long)]
        horizon: Option<usize>,

        /// Seed for reproducible noise
        #[arg(short, long)]
        seed: Option<u64>,

        /// Project the bare trend line
        #[arg(long)]
        no_noise: bool,

        /// Insight language (en, ar)
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name or index for sales values (default: first numeric column)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Print dashboard metrics for a sales table
    Metrics {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Column name or index for sales values
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Normalise a sales table to Month,Sales CSV
    Export {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name or index for sales values
        #[arg(short, long)]
        column: Option<String>,
    },
}

/// Build a session from a file, or from the built-in table
fn load_session(
    input: Option<&Path>,
    column: Option<&str>,
    config: &ForecastConfig,
) -> CliResult<DashboardSession> {
    let store = match input {
        Some(path) => {
            let records = load_file(path, column).map_err(|e| e.to_string())?;
            tracing::info!(rows = records.len(), path = %path.display(), "loaded sales table");
            InMemorySeriesStore::from_records(records).map_err(|e| e.to_string())?
        }
        None => InMemorySeriesStore::with_sample_data(),
    };
    DashboardSession::new(store, config).map_err(|e| e.to_string())
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(
    path: Option<&Path>,
    horizon: Option<usize>,
    seed: Option<u64>,
) -> CliResult<ForecastConfig> {
    let mut config = match path {
        Some(path) => ForecastConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => ForecastConfig::default(),
    };
    if let Some(horizon) = horizon {
        config.horizon = horizon;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Month name for a forecast row, from its 0-based period.
fn forecast_row_label(point: &ForecastPoint) -> &'static str {
    month_label(point.period)
}

/// JSON document written by `forecast`
fn report_json(report: &ForecastReport, lang: Language) -> serde_json::Value {
    let labels: Vec<&str> = report.points.iter().map(forecast_row_label).collect();
    serde_json::json!({
        "fit": report.fit,
        "forecast": report.points,
        "labels": labels,
        "insight": report.insight,
        "recommendation": report.insight.recommendation(),
        "lines": render_insight(&report.insight, lang),
    })
}

fn write_json(json: &serde_json::Value, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Report written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(json)
            .map_err(|e| format!("Failed to encode JSON: {}", e))?;
        println!("{}", text);
    }
    Ok(())
}

/// Run forecast command
#[allow(clippy::too_many_arguments)]
fn run_forecast(
    input: Option<PathBuf>,
    horizon: Option<usize>,
    seed: Option<u64>,
    no_noise: bool,
    lang: String,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    column: Option<String>,
) -> CliResult<()> {
    let lang: Language = lang.parse().map_err(|e: forecast_facade::ForecastError| e.to_string())?;
    let config = load_config(config.as_deref(), horizon, seed)?;
    let mut session = load_session(input.as_deref(), column.as_deref(), &config)?;

    let mut noise: Box<dyn NoiseSource + Send> = if no_noise {
        Box::new(ZeroNoise)
    } else {
        config.noise()
    };
    println!("Loaded {} sales rows", session.records().len());
    let report = session
        .generate_forecast(noise.as_mut())
        .map_err(|e| e.to_string())?;

    println!(
        "Trend: slope={:.2} intercept={:.2} r2={:.3}",
        report.fit.slope, report.fit.intercept, report.fit.r_squared
    );
    println!("Forecast {} periods:", report.points.len());
    for point in &report.points {
        println!(
            "  {} (period {}): {}",
            forecast_row_label(point),
            point.period,
            format_amount(point.value)
        );
    }
    for line in render_insight(&report.insight, lang) {
        println!("{}", line);
    }

    if output.is_some() {
        write_json(&report_json(report, lang), output.as_deref())?;
    }
    Ok(())
}

/// Run metrics command
fn run_metrics(input: Option<PathBuf>, column: Option<String>) -> CliResult<()> {
    let session = load_session(input.as_deref(), column.as_deref(), &ForecastConfig::default())?;
    let metrics = session.metrics();

    println!("Rows:    {}", metrics.count);
    println!("Total:   {:.0}", metrics.total);
    println!("Average: {:.0}", metrics.average);
    println!("Trend:   {}", metrics.trend);
    Ok(())
}

/// Run export command
fn run_export(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    column: Option<String>,
) -> CliResult<()> {
    let session = load_session(input.as_deref(), column.as_deref(), &ForecastConfig::default())?;
    let csv = session.export_csv().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(&path, csv).map_err(|e| format!("Failed to write CSV: {}", e))?;
            println!("Sales table written to {:?}", path);
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Forecast {
            input,
            horizon,
            seed,
            no_noise,
            lang,
            config,
            output,
            column,
        } => run_forecast(input, horizon, seed, no_noise, lang, config, output, column),

        Commands::Metrics { input, column } => run_metrics(input, column),

        Commands::Export {
            input,
            output,
            column,
        } => run_export(input, output, column),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
