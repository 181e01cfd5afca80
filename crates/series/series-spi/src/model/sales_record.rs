//! Sales table row.

use serde::{Deserialize, Serialize};

/// A row of the sales table: period label (e.g. "Jan") and amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub label: String,
    pub value: f64,
}

impl SalesRecord {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
