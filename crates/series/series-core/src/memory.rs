//! In-memory series store.

use series_spi::{Result, SalesRecord, Sample, SeriesError, SeriesStore};

/// Reference table the dashboard starts with.
const SAMPLE_DATA: [(&str, f64); 6] = [
    ("Jan", 45000.0),
    ("Feb", 52000.0),
    ("Mar", 48000.0),
    ("Apr", 61000.0),
    ("May", 58000.0),
    ("Jun", 67000.0),
];

/// Vec-backed series store that validates every appended record.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeriesStore {
    records: Vec<SalesRecord>,
}

impl InMemorySeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with six months of sample sales.
    pub fn with_sample_data() -> Self {
        Self {
            records: SAMPLE_DATA
                .iter()
                .map(|&(label, value)| SalesRecord::new(label, value))
                .collect(),
        }
    }

    /// Build a store from records, rejecting the first invalid one.
    pub fn from_records(records: impl IntoIterator<Item = SalesRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.append(record)?;
        }
        Ok(store)
    }

    /// Borrow the stored records without cloning.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }
}

/// Check a record before it reaches the store.
pub fn validate(record: &SalesRecord) -> Result<()> {
    if record.label.trim().is_empty() {
        return Err(SeriesError::InvalidSample(
            "period label must not be empty".to_string(),
        ));
    }
    if !record.value.is_finite() {
        return Err(SeriesError::InvalidSample(format!(
            "value for '{}' must be a finite number",
            record.label
        )));
    }
    if record.value < 0.0 {
        return Err(SeriesError::InvalidSample(format!(
            "value for '{}' must be non-negative, got {}",
            record.label, record.value
        )));
    }
    Ok(())
}

impl SeriesStore for InMemorySeriesStore {
    fn append(&mut self, record: SalesRecord) -> Result<Sample> {
        if let Err(e) = validate(&record) {
            tracing::warn!(label = %record.label, value = record.value, "rejected sample");
            return Err(e);
        }

        let sample = Sample::new(self.records.len(), record.value);
        self.records.push(SalesRecord {
            label: record.label.trim().to_string(),
            value: record.value,
        });
        Ok(sample)
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn read_all(&self) -> Vec<SalesRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
