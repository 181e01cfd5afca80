//! Trait for trend estimation

use crate::error::Result;
use crate::model::FitResult;
use series_spi::Sample;

/// Fits a straight line to an ordered series of samples.
///
/// # Example
///
/// ```rust,ignore
/// use forecast_spi::{Sample, TrendEstimator};
///
/// fn slope_of<E: TrendEstimator>(estimator: &E, values: &[f64]) -> forecast_spi::Result<f64> {
///     Ok(estimator.fit(&Sample::from_values(values))?.slope)
/// }
/// ```
pub trait TrendEstimator: Send + Sync {
    /// Fit the line, or fail without a partial result.
    fn fit(&self, samples: &[Sample]) -> Result<FitResult>;

    /// Smallest number of samples `fit` accepts.
    fn min_samples(&self) -> usize;
}
