//! Service layer for TUI operations.

mod data_loader;

pub use data_loader::{load_sales_file, save_csv};
