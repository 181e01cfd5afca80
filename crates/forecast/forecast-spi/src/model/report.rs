//! Complete result of a forecast run

use serde::{Deserialize, Serialize};

use super::{FitResult, ForecastPoint, Insight};

/// Fit, projected points and insight produced by one forecast invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub fit: FitResult,
    pub points: Vec<ForecastPoint>,
    pub insight: Insight,
}

impl ForecastReport {
    /// Projected values in period order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}
