//! Forecast Consumer API
//!
//! Consumer configuration, localized text and the dashboard session.
//!
//! This crate provides:
//! - `ForecastConfig` for horizon, noise and trend settings
//! - A static English/Arabic string table and insight rendering
//! - `DashboardSession`, the single owner of the series and latest result
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod locale;
pub mod session;

pub use config::ForecastConfig;
pub use locale::{fill, format_amount, month_label, render_insight, Language, TextKey};
pub use session::DashboardSession;

// Re-export from core
pub use forecast_core::{
    compute_metrics, derive_insight, engine, estimator, insight, metrics, noise, projector,
    ForecastEngine, ForecastProjector, GaussianNoise, MetricsCalculator, OlsTrendEstimator,
    ZeroNoise,
};

// Re-export traits and models from SPI
pub use forecast_spi::{
    DashboardMetrics, FitResult, ForecastError, ForecastPoint, ForecastReport, Insight,
    NoiseSource, Recommendation, Result, TrendDirection, TrendEstimator,
};

pub use series_core::{InMemorySeriesStore, SalesRecord, Sample, SeriesError, SeriesStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        render_insight, DashboardSession, ForecastConfig, Language, TextKey,
    };
    pub use forecast_core::{
        compute_metrics, ForecastEngine, ForecastProjector, GaussianNoise, OlsTrendEstimator,
        ZeroNoise,
    };
    pub use forecast_spi::{
        DashboardMetrics, FitResult, ForecastError, ForecastPoint, ForecastReport, Insight,
        NoiseSource, Recommendation, Result, TrendDirection, TrendEstimator,
    };
    pub use series_core::{InMemorySeriesStore, SalesRecord, Sample, SeriesStore};
}
