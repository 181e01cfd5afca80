//! Model module containing data structures

mod dashboard_metrics;
mod fit_result;
mod forecast_point;
mod insight;
mod report;
mod trend_direction;

pub use dashboard_metrics::DashboardMetrics;
pub use fit_result::FitResult;
pub use forecast_point::ForecastPoint;
pub use insight::{Insight, Recommendation};
pub use report::ForecastReport;
pub use trend_direction::TrendDirection;
