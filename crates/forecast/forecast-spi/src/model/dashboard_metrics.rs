//! Dashboard summary metrics

use serde::{Deserialize, Serialize};

use super::TrendDirection;

/// Figures shown on the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    /// Recent-versus-older classification (not the slope sign)
    pub trend: TrendDirection,
}
