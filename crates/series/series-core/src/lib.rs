//! Series Core
//!
//! In-memory implementation of the sales series store plus delimited-text
//! import and export.

pub mod export;
pub mod memory;

// Re-export SPI items for implementations
pub use series_spi::{Result, SalesRecord, Sample, SeriesError, SeriesStore};

pub use export::{load_file, read_csv, read_json, to_csv, CSV_HEADER};
pub use memory::InMemorySeriesStore;
