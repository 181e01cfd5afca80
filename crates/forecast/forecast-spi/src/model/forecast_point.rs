//! Projected forecast point

use serde::{Deserialize, Serialize};

/// Predicted value for a period beyond the observed series. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period: usize,
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(period: usize, value: f64) -> Self {
        Self { period, value }
    }
}
