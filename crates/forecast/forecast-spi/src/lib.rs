//! Forecast Service Provider Interface
//!
//! Defines traits for trend estimation and noise injection, the result
//! records produced by a forecast run, and forecast errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{NoiseSource, TrendEstimator};
pub use error::{ForecastError, Result};
pub use model::{
    DashboardMetrics, FitResult, ForecastPoint, ForecastReport, Insight, Recommendation,
    TrendDirection,
};

pub use series_spi::{SalesRecord, Sample, SeriesError};
