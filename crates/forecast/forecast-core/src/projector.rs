//! Forecast projection
//!
//! Extends a fitted line past the observed series, perturbing each point
//! with noise proportional to its magnitude and clamping at zero.

use forecast_spi::{FitResult, ForecastError, ForecastPoint, NoiseSource, Result};

/// Periods projected per run.
pub const DEFAULT_HORIZON: usize = 6;

/// Noise standard deviation as a fraction of the projected value.
pub const DEFAULT_NOISE_RATIO: f64 = 0.05;

/// Projects a [`FitResult`] forward a fixed number of periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastProjector {
    horizon: usize,
    noise_ratio: f64,
}

impl Default for ForecastProjector {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            noise_ratio: DEFAULT_NOISE_RATIO,
        }
    }
}

impl ForecastProjector {
    pub fn new(horizon: usize, noise_ratio: f64) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be at least 1",
            ));
        }
        if !noise_ratio.is_finite() || noise_ratio < 0.0 {
            return Err(ForecastError::invalid_parameter(
                "noise_ratio",
                format!("must be a non-negative number, got {}", noise_ratio),
            ));
        }
        Ok(Self {
            horizon,
            noise_ratio,
        })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn noise_ratio(&self) -> f64 {
        self.noise_ratio
    }

    /// Project `horizon` points at periods `start_period..start_period + horizon`.
    ///
    /// Each value is `max(0, predicted + ε)` with `ε ~ noise(ratio · |predicted|)`.
    pub fn project(
        &self,
        fit: &FitResult,
        start_period: usize,
        noise: &mut dyn NoiseSource,
    ) -> Vec<ForecastPoint> {
        (start_period..start_period + self.horizon)
            .map(|period| {
                let predicted = fit.predict_at(period);
                let epsilon = noise.sample(self.noise_ratio * predicted.abs());
                ForecastPoint::new(period, (predicted + epsilon).max(0.0))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{GaussianNoise, ZeroNoise};

    struct FixedNoise(f64);

    impl NoiseSource for FixedNoise {
        fn sample(&mut self, _std_dev: f64) -> f64 {
            self.0
        }
    }

    struct RecordingNoise(Vec<f64>);

    impl NoiseSource for RecordingNoise {
        fn sample(&mut self, std_dev: f64) -> f64 {
            self.0.push(std_dev);
            0.0
        }
    }

    fn line(slope: f64, intercept: f64) -> FitResult {
        FitResult {
            slope,
            intercept,
            r_squared: 1.0,
            n_observations: 5,
        }
    }

    #[test]
    fn test_zero_noise_follows_line_exactly() {
        let fit = line(10.0, 10.0);
        let points = ForecastProjector::default().project(&fit, 5, &mut ZeroNoise);

        assert_eq!(points.len(), 6);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.period, 5 + i);
            assert_eq!(p.value, fit.predict_at(p.period));
        }
    }

    #[test]
    fn test_negative_projection_clamped_to_zero() {
        // Steeply decreasing: 100, 50, 0, -50, ...
        let fit = line(-50.0, 100.0);
        let points = ForecastProjector::new(10, 0.05)
            .unwrap()
            .project(&fit, 3, &mut ZeroNoise);

        assert!(points.iter().all(|p| p.value >= 0.0));
        assert!(points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_negative_noise_clamped_to_zero() {
        let fit = line(0.0, 10.0);
        let points = ForecastProjector::default().project(&fit, 0, &mut FixedNoise(-25.0));
        assert!(points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_noise_added_to_prediction() {
        let fit = line(1.0, 100.0);
        let points = ForecastProjector::default().project(&fit, 0, &mut FixedNoise(2.5));
        assert_eq!(points[0].value, 102.5);
        assert_eq!(points[3].value, 105.5);
    }

    #[test]
    fn test_noise_deviation_is_ratio_of_magnitude() {
        let fit = line(-100.0, 200.0);
        let mut noise = RecordingNoise(Vec::new());
        ForecastProjector::new(4, 0.05)
            .unwrap()
            .project(&fit, 1, &mut noise);

        // predictions 100, 0, -100, -200
        let expected = [5.0, 0.0, 5.0, 10.0];
        for (got, want) in noise.0.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gaussian_noise_never_negative() {
        let fit = line(-1000.0, 5000.0);
        let mut noise = GaussianNoise::seeded(11);
        let points = ForecastProjector::new(12, 0.5)
            .unwrap()
            .project(&fit, 0, &mut noise);
        assert!(points.iter().all(|p| p.value >= 0.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(ForecastProjector::new(0, 0.05).is_err());
        assert!(ForecastProjector::new(6, -0.1).is_err());
        assert!(ForecastProjector::new(6, f64::NAN).is_err());
        assert!(ForecastProjector::new(6, 0.0).is_ok());
    }

    #[test]
    fn test_defaults() {
        let projector = ForecastProjector::default();
        assert_eq!(projector.horizon(), 6);
        assert_eq!(projector.noise_ratio(), 0.05);
    }
}
