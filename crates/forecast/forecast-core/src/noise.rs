//! Noise sources for forecast projection

use forecast_spi::NoiseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Normally distributed noise, `N(0, std_dev)` per draw.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R = StdRng> {
    rng: R,
}

impl GaussianNoise<StdRng> {
    /// Seeded from OS entropy; output differs between runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> GaussianNoise<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn sample(&mut self, std_dev: f64) -> f64 {
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return 0.0;
        }
        match Normal::new(0.0, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }
}

/// Always returns zero, making the projection follow the fitted line exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self, _std_dev: f64) -> f64 {
        0.0
    }
}
