//! Model module containing data structures

mod sales_record;
mod sample;

pub use sales_record::SalesRecord;
pub use sample::Sample;
