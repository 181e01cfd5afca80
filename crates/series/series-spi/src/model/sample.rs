//! Observed series sample.

use serde::{Deserialize, Serialize};

/// One observation of the series: a 0-based period index and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Period index (x)
    pub period: usize,
    /// Observed value (y)
    pub value: f64,
}

impl Sample {
    pub fn new(period: usize, value: f64) -> Self {
        Self { period, value }
    }

    /// Build samples with sequential periods `0..n` from raw values.
    pub fn from_values(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(period, &value)| Sample { period, value })
            .collect()
    }
}
