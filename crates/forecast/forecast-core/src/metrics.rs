//! Dashboard summary metrics
//!
//! The trend here compares the mean of the last three values with the mean
//! of everything before them. It is independent of the fitted slope and the
//! two can disagree for the same data.

use forecast_spi::{DashboardMetrics, ForecastError, Result, TrendDirection};

/// Values counted as "recent" for the dashboard trend.
pub const RECENT_WINDOW: usize = 3;

/// Default ±band around the older mean inside which the trend is stable.
pub const DEFAULT_TREND_BAND: f64 = 0.05;

/// Computes [`DashboardMetrics`] with a configurable stability band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsCalculator {
    trend_band: f64,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self {
            trend_band: DEFAULT_TREND_BAND,
        }
    }
}

impl MetricsCalculator {
    pub fn new(trend_band: f64) -> Result<Self> {
        if !trend_band.is_finite() || !(0.0..1.0).contains(&trend_band) {
            return Err(ForecastError::invalid_parameter(
                "trend_band",
                "must be in [0, 1)",
            ));
        }
        Ok(Self { trend_band })
    }

    pub fn compute(&self, values: &[f64]) -> DashboardMetrics {
        if values.is_empty() {
            return DashboardMetrics::default();
        }

        let total: f64 = values.iter().sum();
        let average = total / values.len() as f64;

        DashboardMetrics {
            count: values.len(),
            total,
            average,
            trend: self.classify(values),
        }
    }

    fn classify(&self, values: &[f64]) -> TrendDirection {
        if values.len() < RECENT_WINDOW {
            return TrendDirection::Stable;
        }

        let split = values.len() - RECENT_WINDOW;
        let recent = mean(&values[split..]);
        let older = if split > 0 {
            mean(&values[..split])
        } else {
            recent
        };

        if recent > older * (1.0 + self.trend_band) {
            TrendDirection::Increasing
        } else if recent < older * (1.0 - self.trend_band) {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Metrics with the default ±5% band.
pub fn compute_metrics(values: &[f64]) -> DashboardMetrics {
    MetricsCalculator::default().compute(values)
}
