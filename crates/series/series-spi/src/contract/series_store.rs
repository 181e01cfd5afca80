//! Series store trait definition.

use crate::error::Result;
use crate::model::{SalesRecord, Sample};

/// Ordered store of sales records.
///
/// Period indices are assigned by position, so the samples a store hands
/// out are always strictly increasing from 0. Forecasting code only reads
/// from the store; mutation belongs to whoever owns it.
pub trait SeriesStore: Send + Sync {
    /// Validate and append a record, returning the sample it became.
    fn append(&mut self, record: SalesRecord) -> Result<Sample>;

    /// Remove every record.
    fn clear(&mut self);

    /// All records in insertion order.
    fn read_all(&self) -> Vec<SalesRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records as `(period, value)` samples.
    fn samples(&self) -> Vec<Sample> {
        self.read_all()
            .iter()
            .enumerate()
            .map(|(period, r)| Sample::new(period, r.value))
            .collect()
    }

    /// Observed values only.
    fn values(&self) -> Vec<f64> {
        self.read_all().iter().map(|r| r.value).collect()
    }
}
