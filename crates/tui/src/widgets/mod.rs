//! Reusable widgets for the TUI.

mod chart;

pub use chart::{create_comparison_chart, create_forecast_chart, create_sales_chart, to_points};
