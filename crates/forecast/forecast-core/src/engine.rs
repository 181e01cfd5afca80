//! Forecast engine: fit, project and summarise in one call.

use forecast_spi::{ForecastError, ForecastReport, NoiseSource, Result, Sample, TrendEstimator};

use crate::estimator::OlsTrendEstimator;
use crate::insight::derive_insight;
use crate::projector::ForecastProjector;

/// Runs the full forecast for an observed series.
///
/// # Example
///
/// ```rust
/// use forecast_core::{ForecastEngine, Sample, ZeroNoise};
///
/// let samples = Sample::from_values(&[10.0, 20.0, 30.0]);
/// let report = ForecastEngine::default().run(&samples, &mut ZeroNoise).unwrap();
/// assert_eq!(report.points.len(), 6);
/// assert_eq!(report.points[0].period, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ForecastEngine<E = OlsTrendEstimator> {
    estimator: E,
    projector: ForecastProjector,
}

impl Default for ForecastEngine<OlsTrendEstimator> {
    fn default() -> Self {
        Self::new(ForecastProjector::default())
    }
}

impl ForecastEngine<OlsTrendEstimator> {
    pub fn new(projector: ForecastProjector) -> Self {
        Self {
            estimator: OlsTrendEstimator::new(),
            projector,
        }
    }
}

impl<E: TrendEstimator> ForecastEngine<E> {
    pub fn with_estimator(estimator: E, projector: ForecastProjector) -> Self {
        Self {
            estimator,
            projector,
        }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn projector(&self) -> &ForecastProjector {
        &self.projector
    }

    /// Fit the series, project past its last sample and derive the insight.
    ///
    /// Fails without a partial result when the fit fails.
    pub fn run(&self, samples: &[Sample], noise: &mut dyn NoiseSource) -> Result<ForecastReport> {
        let fit = self.estimator.fit(samples)?;

        let last = samples.last().ok_or(ForecastError::InsufficientData {
            required: self.estimator.min_samples(),
            actual: 0,
        })?;

        let points = self.projector.project(&fit, last.period + 1, noise);
        let first = points
            .first()
            .ok_or_else(|| ForecastError::invalid_parameter("horizon", "must be at least 1"))?;
        let insight = derive_insight(&fit, samples, first);

        tracing::debug!(
            horizon = points.len(),
            direction = %insight.direction,
            next_value = insight.next_value,
            "forecast generated"
        );

        Ok(ForecastReport {
            fit,
            points,
            insight,
        })
    }
}
