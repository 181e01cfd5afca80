//! Contract module containing trait definitions for forecast operations

mod noise_source;
mod trend_estimator;

pub use noise_source::NoiseSource;
pub use trend_estimator::TrendEstimator;
