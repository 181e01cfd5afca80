//! Trait for forecast noise injection

/// Source of the zero-mean perturbation added to each projected value.
///
/// Swapping the source is how callers choose between realistic jitter and
/// a reproducible projection.
pub trait NoiseSource {
    /// Draw one perturbation with the given standard deviation (>= 0).
    fn sample(&mut self, std_dev: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self, std_dev: f64) -> f64 {
        (**self).sample(std_dev)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self, std_dev: f64) -> f64 {
        (**self).sample(std_dev)
    }
}
