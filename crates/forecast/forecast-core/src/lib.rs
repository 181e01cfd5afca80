//! Forecast Core
//!
//! Core implementations for trend estimation, forecast projection,
//! noise sources, insight derivation and dashboard metrics.

pub mod engine;
pub mod estimator;
pub mod insight;
pub mod metrics;
pub mod noise;
pub mod projector;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    DashboardMetrics, FitResult, ForecastError, ForecastPoint, ForecastReport, Insight,
    NoiseSource, Recommendation, Result, Sample, TrendDirection, TrendEstimator,
};

// Re-export main types
pub use engine::ForecastEngine;
pub use estimator::OlsTrendEstimator;
pub use insight::derive_insight;
pub use metrics::{compute_metrics, MetricsCalculator};
pub use noise::{GaussianNoise, ZeroNoise};
pub use projector::ForecastProjector;
