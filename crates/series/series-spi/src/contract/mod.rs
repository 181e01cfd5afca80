//! Contract module containing trait definitions for series storage

mod series_store;

pub use series_store::SeriesStore;
