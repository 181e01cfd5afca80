//! Insight derivation from a fitted trend and its first forecast point.

use forecast_spi::{FitResult, ForecastPoint, Insight, Sample, TrendDirection};

/// Summarise a forecast run.
///
/// - direction: sign of the slope
/// - trend percent: `|slope / mean(history)| * 100`, 0 when the mean is 0
/// - change percent: `(first - last) / last * 100`, `None` when last is 0
pub fn derive_insight(fit: &FitResult, history: &[Sample], first: &ForecastPoint) -> Insight {
    let mean = if history.is_empty() {
        0.0
    } else {
        history.iter().map(|s| s.value).sum::<f64>() / history.len() as f64
    };

    let trend_percent = if mean != 0.0 {
        (fit.slope / mean * 100.0).abs()
    } else {
        0.0
    };

    let change_percent = history
        .last()
        .map(|s| s.value)
        .filter(|&last| last != 0.0)
        .map(|last| (first.value - last) / last * 100.0);

    Insight {
        direction: TrendDirection::from_slope(fit.slope),
        trend_percent,
        next_value: first.value,
        change_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::Recommendation;

    fn fit(slope: f64, intercept: f64) -> FitResult {
        FitResult {
            slope,
            intercept,
            r_squared: 1.0,
            n_observations: 3,
        }
    }

    #[test]
    fn test_increasing() {
        let history = Sample::from_values(&[100.0, 110.0, 120.0]);
        let insight = derive_insight(&fit(10.0, 100.0), &history, &ForecastPoint::new(3, 130.0));

        assert_eq!(insight.direction, TrendDirection::Increasing);
        assert!((insight.trend_percent - 10.0 / 110.0 * 100.0).abs() < 1e-9);
        assert_eq!(insight.next_value, 130.0);
        let change = insight.change_percent.unwrap();
        assert!((change - 10.0 / 120.0 * 100.0).abs() < 1e-9);
        assert_eq!(insight.recommendation(), Recommendation::Growth);
    }

    #[test]
    fn test_decreasing_magnitude_is_absolute() {
        let history = Sample::from_values(&[120.0, 110.0, 100.0]);
        let insight = derive_insight(&fit(-10.0, 120.0), &history, &ForecastPoint::new(3, 90.0));

        assert_eq!(insight.direction, TrendDirection::Decreasing);
        assert!(insight.trend_percent > 0.0);
        assert!(insight.change_percent.unwrap() < 0.0);
        assert_eq!(insight.recommendation(), Recommendation::Retention);
    }

    #[test]
    fn test_exact_zero_slope_is_stable_with_retention_advice() {
        let history = Sample::from_values(&[100.0, 100.0, 100.0]);
        let insight = derive_insight(&fit(0.0, 100.0), &history, &ForecastPoint::new(3, 100.0));

        assert_eq!(insight.direction, TrendDirection::Stable);
        assert_eq!(insight.trend_percent, 0.0);
        assert_eq!(insight.change_percent, Some(0.0));
        assert_eq!(insight.recommendation(), Recommendation::Retention);
    }

    #[test]
    fn test_last_value_zero_has_no_change_percent() {
        let history = Sample::from_values(&[20.0, 10.0, 0.0]);
        let insight = derive_insight(&fit(-10.0, 20.0), &history, &ForecastPoint::new(3, 0.0));
        assert_eq!(insight.change_percent, None);
    }

    #[test]
    fn test_zero_mean_has_zero_trend_percent() {
        let history = Sample::from_values(&[0.0, 0.0, 0.0]);
        let insight = derive_insight(&fit(0.0, 0.0), &history, &ForecastPoint::new(3, 0.0));
        assert_eq!(insight.trend_percent, 0.0);
        assert!(insight.trend_percent.is_finite());
    }
}
