//! Random perturbation sources for the estimator stages.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Source of the random draws the estimator mixes into its formulas.
///
/// Stages receive this explicitly, so callers decide whether a run is
/// stochastic ([`RngNoise`]) or fully deterministic ([`NeutralNoise`]).
pub trait NoiseSource {
    /// Draw from the uniform distribution on `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw from the normal distribution `N(mean, std_dev²)`.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Noise backed by a `rand` generator.
pub struct RngNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        Uniform::new(low, high).sample(&mut self.rng)
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        mean + std_dev * z
    }
}

/// Noise that always returns each distribution's expected value.
///
/// With this source every stage collapses to its plain formula: need-score
/// jitter is 0, the quantity residual is 0 and the lead-time variance factor
/// is exactly 1.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralNoise;

impl NoiseSource for NeutralNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }

    fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
        mean
    }
}
