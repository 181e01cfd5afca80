//! Dashboard session: the single owner of the sales series and the most
//! recent forecast.
//!
//! Front ends hold one session (behind a mutex when shared) and pass it by
//! reference; there is no process-wide state.

use forecast_core::{ForecastEngine, MetricsCalculator};
use forecast_spi::{DashboardMetrics, ForecastReport, NoiseSource, Result};
use series_core::{to_csv, InMemorySeriesStore, SalesRecord, Sample, SeriesStore};

use crate::config::ForecastConfig;
use crate::locale::{render_insight, Language};

/// Series store plus the latest forecast computed from it.
#[derive(Debug, Clone)]
pub struct DashboardSession<S = InMemorySeriesStore> {
    store: S,
    engine: ForecastEngine,
    metrics: MetricsCalculator,
    latest: Option<ForecastReport>,
}

impl DashboardSession<InMemorySeriesStore> {
    /// Session over the six-month reference table with default settings.
    pub fn with_sample_data() -> Self {
        Self {
            store: InMemorySeriesStore::with_sample_data(),
            engine: ForecastEngine::default(),
            metrics: MetricsCalculator::default(),
            latest: None,
        }
    }
}

impl<S: SeriesStore> DashboardSession<S> {
    pub fn new(store: S, config: &ForecastConfig) -> Result<Self> {
        Ok(Self {
            store,
            engine: config.engine()?,
            metrics: config.metrics_calculator()?,
            latest: None,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Projected periods per forecast.
    pub fn horizon(&self) -> usize {
        self.engine.projector().horizon()
    }

    /// Validate and append one row.
    pub fn append(&mut self, label: impl Into<String>, value: f64) -> Result<Sample> {
        Ok(self.store.append(SalesRecord::new(label, value))?)
    }

    /// Replace the whole table. Nothing changes if any record is invalid.
    pub fn replace_records(&mut self, records: Vec<SalesRecord>) -> Result<()> {
        for record in &records {
            series_core::memory::validate(record)?;
        }
        self.clear();
        for record in records {
            self.store.append(record)?;
        }
        Ok(())
    }

    /// Drop every row and the latest forecast.
    pub fn clear(&mut self) {
        self.store.clear();
        self.latest = None;
    }

    pub fn records(&self) -> Vec<SalesRecord> {
        self.store.read_all()
    }

    pub fn metrics(&self) -> DashboardMetrics {
        self.metrics.compute(&self.store.values())
    }

    /// Run a fresh forecast and make it the latest result.
    ///
    /// On failure the previous result stays in place.
    pub fn generate_forecast(&mut self, noise: &mut dyn NoiseSource) -> Result<&ForecastReport> {
        let samples = self.store.samples();
        let report = self.engine.run(&samples, noise)?;
        tracing::info!(
            samples = samples.len(),
            slope = report.fit.slope,
            direction = %report.insight.direction,
            "forecast updated"
        );
        Ok(&*self.latest.insert(report))
    }

    pub fn latest(&self) -> Option<&ForecastReport> {
        self.latest.as_ref()
    }

    /// Rendered insight lines of the latest forecast.
    pub fn insight_lines(&self, lang: Language) -> Option<Vec<String>> {
        self.latest
            .as_ref()
            .map(|report| render_insight(&report.insight, lang))
    }

    /// The table as `Month,Sales` CSV.
    pub fn export_csv(&self) -> Result<String> {
        Ok(to_csv(&self.store.read_all())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::ZeroNoise;
    use forecast_spi::{ForecastError, TrendDirection};

    #[test]
    fn test_sample_session_forecasts_increasing() {
        let mut session = DashboardSession::with_sample_data();
        let report = session.generate_forecast(&mut ZeroNoise).unwrap();
        assert_eq!(report.points.len(), 6);
        assert_eq!(report.insight.direction, TrendDirection::Increasing);
        assert!(session.latest().is_some());
    }

    #[test]
    fn test_clear_discards_latest_report() {
        let mut session = DashboardSession::with_sample_data();
        session.generate_forecast(&mut ZeroNoise).unwrap();
        session.clear();
        assert!(session.latest().is_none());
        assert!(session.records().is_empty());
        assert_eq!(session.metrics().count, 0);
    }

    #[test]
    fn test_too_few_rows_is_rejected() {
        let mut session =
            DashboardSession::new(InMemorySeriesStore::new(), &ForecastConfig::default()).unwrap();
        session.append("Jan", 1.0).unwrap();
        session.append("Feb", 2.0).unwrap();

        let err = session.generate_forecast(&mut ZeroNoise).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
        assert!(session.latest().is_none());
    }

    #[test]
    fn test_error_leaves_existing_report_untouched() {
        let mut session = DashboardSession::with_sample_data();
        let before = session.generate_forecast(&mut ZeroNoise).unwrap().clone();

        // A second estimator requiring more samples than the table holds
        let config = ForecastConfig {
            min_samples: 10,
            ..Default::default()
        };
        let mut strict = DashboardSession::new(InMemorySeriesStore::with_sample_data(), &config)
            .unwrap();
        strict.latest = Some(before.clone());
        assert!(strict.generate_forecast(&mut ZeroNoise).is_err());
        assert_eq!(strict.latest(), Some(&before));
    }

    #[test]
    fn test_append_rejects_invalid_sample() {
        let mut session = DashboardSession::with_sample_data();
        let err = session.append("Jul", -5.0).unwrap_err();
        assert!(matches!(err, ForecastError::Series(_)));
        assert_eq!(session.records().len(), 6);
    }

    #[test]
    fn test_append_does_not_discard_latest() {
        let mut session = DashboardSession::with_sample_data();
        session.generate_forecast(&mut ZeroNoise).unwrap();
        session.append("Jul", 70000.0).unwrap();
        assert!(session.latest().is_some());
    }

    #[test]
    fn test_replace_records_is_all_or_nothing() {
        let mut session = DashboardSession::with_sample_data();
        let err = session.replace_records(vec![
            SalesRecord::new("Q1", 10.0),
            SalesRecord::new("Q2", f64::NAN),
        ]);
        assert!(err.is_err());
        assert_eq!(session.records().len(), 6);

        session
            .replace_records(vec![SalesRecord::new("Q1", 10.0), SalesRecord::new("Q2", 20.0)])
            .unwrap();
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn test_insight_lines_follow_language() {
        let mut session = DashboardSession::with_sample_data();
        assert!(session.insight_lines(Language::English).is_none());
        session.generate_forecast(&mut ZeroNoise).unwrap();
        let en = session.insight_lines(Language::English).unwrap();
        let ar = session.insight_lines(Language::Arabic).unwrap();
        assert_eq!(en.len(), 5);
        assert_ne!(en, ar);
    }

    #[test]
    fn test_export_csv() {
        let session = DashboardSession::with_sample_data();
        let csv = session.export_csv().unwrap();
        assert!(csv.starts_with("Month,Sales"));
        assert!(csv.contains("Jun,67000"));
    }

    #[test]
    fn test_horizon_from_config() {
        let config = ForecastConfig {
            horizon: 4,
            ..Default::default()
        };
        let session = DashboardSession::new(InMemorySeriesStore::new(), &config).unwrap();
        assert_eq!(session.horizon(), 4);
    }
}
