//! Forecast Facade
//!
//! High-level API for sales forecasting. Re-exports all public types
//! from the forecast and series stacks for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{engine, estimator, insight, metrics, noise, projector};

// Re-export series import/export
pub use series_core::{export, load_file, read_csv, read_json, to_csv, CSV_HEADER};

// Re-export SPI traits
pub use forecast_spi::{NoiseSource, TrendEstimator};
