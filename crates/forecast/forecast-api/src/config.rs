//! Forecast configuration types.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use forecast_core::estimator::DEFAULT_MIN_SAMPLES;
use forecast_core::metrics::DEFAULT_TREND_BAND;
use forecast_core::projector::{DEFAULT_HORIZON, DEFAULT_NOISE_RATIO};
use forecast_core::{
    ForecastEngine, ForecastProjector, GaussianNoise, MetricsCalculator, OlsTrendEstimator,
};
use forecast_spi::{ForecastError, NoiseSource, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ForecastConfig::horizon`].
pub const ENV_HORIZON: &str = "SALESCAST_HORIZON";
/// Environment variable overriding [`ForecastConfig::noise_ratio`].
pub const ENV_NOISE_RATIO: &str = "SALESCAST_NOISE_RATIO";
/// Environment variable overriding [`ForecastConfig::seed`].
pub const ENV_SEED: &str = "SALESCAST_SEED";

/// Settings for a forecast run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Future periods to project
    pub horizon: usize,
    /// Noise standard deviation as a fraction of each projected value
    pub noise_ratio: f64,
    /// Fewest samples a trend is fitted on
    pub min_samples: usize,
    /// Stability band of the dashboard trend card
    pub trend_band: f64,
    /// Fixed seed for reproducible noise; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            noise_ratio: DEFAULT_NOISE_RATIO,
            min_samples: DEFAULT_MIN_SAMPLES,
            trend_band: DEFAULT_TREND_BAND,
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            ForecastError::invalid_parameter("config", format!("{}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ForecastError::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `SALESCAST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (environment, map, ...).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_HORIZON) {
            self.horizon = parse(ENV_HORIZON, &raw)?;
        }
        if let Some(raw) = lookup(ENV_NOISE_RATIO) {
            self.noise_ratio = parse(ENV_NOISE_RATIO, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            self.seed = Some(parse(ENV_SEED, &raw)?);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check every setting is in range.
    pub fn validate(&self) -> Result<()> {
        self.projector()?;
        OlsTrendEstimator::with_min_samples(self.min_samples)?;
        MetricsCalculator::new(self.trend_band)?;
        Ok(())
    }

    pub fn projector(&self) -> Result<ForecastProjector> {
        ForecastProjector::new(self.horizon, self.noise_ratio)
    }

    pub fn engine(&self) -> Result<ForecastEngine> {
        Ok(ForecastEngine::with_estimator(
            OlsTrendEstimator::with_min_samples(self.min_samples)?,
            self.projector()?,
        ))
    }

    pub fn metrics_calculator(&self) -> Result<MetricsCalculator> {
        MetricsCalculator::new(self.trend_band)
    }

    /// Gaussian noise, seeded when `seed` is set.
    pub fn noise(&self) -> Box<dyn NoiseSource + Send> {
        match self.seed {
            Some(seed) => Box::new(GaussianNoise::seeded(seed)),
            None => Box::new(GaussianNoise::from_entropy()),
        }
    }
}

fn parse<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ForecastError::invalid_parameter(name, format!("cannot parse '{}'", raw)))
}
