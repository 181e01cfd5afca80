//! Insight record derived from a forecast run

use serde::{Deserialize, Serialize};

use super::TrendDirection;

/// Message class for the recommendation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Grow inventory, expand marketing reach
    Growth,
    /// Focus on retention, run promotions
    Retention,
}

/// Numeric summary of the trend behind one forecast.
///
/// Created fresh per forecast and replaced wholesale by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Slope-sign direction
    pub direction: TrendDirection,
    /// `|slope / mean| * 100`
    pub trend_percent: f64,
    /// First forecast value
    pub next_value: f64,
    /// Change of the first forecast value from the last observed one, in percent.
    /// `None` when the last observed value is zero.
    pub change_percent: Option<f64>,
}

impl Insight {
    /// Two-way split on slope sign: only a rising trend gets the growth advice.
    pub fn recommendation(&self) -> Recommendation {
        match self.direction {
            TrendDirection::Increasing => Recommendation::Growth,
            TrendDirection::Decreasing | TrendDirection::Stable => Recommendation::Retention,
        }
    }
}
