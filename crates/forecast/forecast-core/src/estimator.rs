//! Ordinary least squares trend estimation
//!
//! Fits `value = slope * period + intercept` in closed form over centred
//! periods:
//!
//! ```text
//! slope     = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)²
//! intercept = ȳ − slope·x̄
//! ```

use forecast_spi::{FitResult, ForecastError, Result, Sample, TrendEstimator};

/// Fewest samples a trend is fitted on.
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Closed-form OLS estimator over `(period, value)` samples.
///
/// # Example
///
/// ```rust
/// use forecast_core::{OlsTrendEstimator, Sample, TrendEstimator};
///
/// let samples = Sample::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0]);
/// let fit = OlsTrendEstimator::new().fit(&samples).unwrap();
/// assert!((fit.slope - 10.0).abs() < 1e-9);
/// assert!((fit.intercept - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OlsTrendEstimator {
    min_samples: usize,
}

impl Default for OlsTrendEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl OlsTrendEstimator {
    pub fn new() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }

    /// Require a different minimum sample count (at least 2).
    pub fn with_min_samples(min_samples: usize) -> Result<Self> {
        if min_samples < 2 {
            return Err(ForecastError::invalid_parameter(
                "min_samples",
                "a line needs at least 2 samples",
            ));
        }
        Ok(Self { min_samples })
    }
}

impl TrendEstimator for OlsTrendEstimator {
    fn fit(&self, samples: &[Sample]) -> Result<FitResult> {
        if samples.len() < self.min_samples {
            return Err(ForecastError::InsufficientData {
                required: self.min_samples,
                actual: samples.len(),
            });
        }

        if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
            return Err(ForecastError::invalid_parameter(
                "samples",
                format!("value at period {} is not finite", bad.period),
            ));
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|s| s.period as f64).sum::<f64>() / n;
        let mean_y = samples.iter().map(|s| s.value).sum::<f64>() / n;

        let sxx: f64 = samples
            .iter()
            .map(|s| (s.period as f64 - mean_x).powi(2))
            .sum();
        if sxx <= 0.0 {
            return Err(ForecastError::DegenerateFit(
                "period indices have zero variance".to_string(),
            ));
        }
        let sxy: f64 = samples
            .iter()
            .map(|s| (s.period as f64 - mean_x) * (s.value - mean_y))
            .sum();

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ForecastError::DegenerateFit(
                "values overflow the least-squares sums".to_string(),
            ));
        }

        let ss_tot: f64 = samples.iter().map(|s| (s.value - mean_y).powi(2)).sum();
        let ss_res: f64 = samples
            .iter()
            .map(|s| (s.value - (slope * s.period as f64 + intercept)).powi(2))
            .sum();
        let r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        tracing::debug!(n = samples.len(), slope, intercept, r_squared, "fitted trend");

        Ok(FitResult {
            slope,
            intercept,
            r_squared,
            n_observations: samples.len(),
        })
    }

    fn min_samples(&self) -> usize {
        self.min_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_increasing_series_has_positive_slope() {
        let samples = Sample::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let fit = OlsTrendEstimator::new().fit(&samples).unwrap();

        assert!(fit.slope > 0.0);
        assert!((fit.slope - 10.0).abs() < EPS);
        // intercept ≈ first value − slope·0
        assert!((fit.intercept - 10.0).abs() < EPS);
        assert!((fit.r_squared - 1.0).abs() < EPS);
        assert_eq!(fit.n_observations, 5);
    }

    #[test]
    fn test_constant_series_is_flat() {
        let samples = Sample::from_values(&[100.0; 5]);
        let fit = OlsTrendEstimator::new().fit(&samples).unwrap();

        assert!(fit.slope.abs() < EPS);
        assert!((fit.intercept - 100.0).abs() < EPS);
        assert_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn test_two_samples_is_insufficient() {
        let samples = Sample::from_values(&[1.0, 2.0]);
        let err = OlsTrendEstimator::new().fit(&samples).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_empty_is_insufficient() {
        let err = OlsTrendEstimator::new().fit(&[]).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData { actual: 0, .. }));
    }

    #[test]
    fn test_identical_periods_are_degenerate() {
        let samples = vec![
            Sample::new(4, 10.0),
            Sample::new(4, 20.0),
            Sample::new(4, 30.0),
        ];
        let err = OlsTrendEstimator::new().fit(&samples).unwrap_err();
        assert!(matches!(err, ForecastError::DegenerateFit(_)));
    }

    #[test]
    fn test_identical_large_periods_are_degenerate() {
        let samples = vec![
            Sample::new(1_000_003, 1.0),
            Sample::new(1_000_003, 2.0),
            Sample::new(1_000_003, 3.0),
        ];
        let err = OlsTrendEstimator::new().fit(&samples).unwrap_err();
        assert!(matches!(err, ForecastError::DegenerateFit(_)));
    }

    #[test]
    fn test_non_sequential_periods() {
        // y = 3x + 1 sampled at irregular periods
        let samples = vec![
            Sample::new(0, 1.0),
            Sample::new(2, 7.0),
            Sample::new(7, 22.0),
        ];
        let fit = OlsTrendEstimator::new().fit(&samples).unwrap();
        assert!((fit.slope - 3.0).abs() < EPS);
        assert!((fit.intercept - 1.0).abs() < EPS);
    }

    #[test]
    fn test_reference_sales_table() {
        let samples =
            Sample::from_values(&[45000.0, 52000.0, 48000.0, 61000.0, 58000.0, 67000.0]);
        let fit = OlsTrendEstimator::new().fit(&samples).unwrap();

        // Σx=15, Σy=331000, Σxy=898000, Σx²=55
        let expected_slope = (6.0 * 898000.0 - 15.0 * 331000.0) / (6.0 * 55.0 - 225.0);
        let expected_intercept = (331000.0 - expected_slope * 15.0) / 6.0;
        assert!((fit.slope - expected_slope).abs() < 1e-6);
        assert!((fit.intercept - expected_intercept).abs() < 1e-6);
        assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    }

    #[test]
    fn test_distinct_large_periods_fit() {
        let samples = vec![
            Sample::new(1_000_000_000, 5.0),
            Sample::new(1_000_000_001, 7.0),
            Sample::new(1_000_000_002, 9.0),
        ];
        let fit = OlsTrendEstimator::new().fit(&samples).unwrap();
        assert!((fit.slope - 2.0).abs() < EPS);
        assert!((fit.predict_at(1_000_000_003) - 11.0).abs() < 1e-3);
    }

    #[test]
    fn test_overflowing_values_are_degenerate() {
        let samples = Sample::from_values(&[1e308, 1e308, 1e308]);
        let err = OlsTrendEstimator::new().fit(&samples).unwrap_err();
        assert!(matches!(err, ForecastError::DegenerateFit(_)));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let samples = Sample::from_values(&[1.0, f64::NAN, 3.0]);
        let err = OlsTrendEstimator::new().fit(&samples).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter { .. }));
    }

    #[test]
    fn test_custom_min_samples() {
        let estimator = OlsTrendEstimator::with_min_samples(2).unwrap();
        assert_eq!(estimator.min_samples(), 2);
        assert!(estimator.fit(&Sample::from_values(&[1.0, 3.0])).is_ok());

        assert!(OlsTrendEstimator::with_min_samples(1).is_err());
    }
}
