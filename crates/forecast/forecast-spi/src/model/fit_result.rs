//! Fitted trend line model

use serde::{Deserialize, Serialize};

/// Least-squares line `value = slope * period + intercept`.
///
/// Recomputed on every forecast request; never cached between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Change in value per period
    pub slope: f64,
    /// Value at period 0
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Number of samples the line was fitted on
    pub n_observations: usize,
}

impl FitResult {
    /// Evaluate the fitted line at a period index.
    pub fn predict_at(&self, period: usize) -> f64 {
        self.slope * period as f64 + self.intercept
    }
}
