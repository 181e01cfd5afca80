//! Series Service Provider Interface
//!
//! Defines the sales series model, the store contract and its errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesStore;
pub use error::{Result, SeriesError};
pub use model::{SalesRecord, Sample};
