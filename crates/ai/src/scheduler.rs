use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::job::AiJob;
use crate::noise::RngNoise;
use crate::result::AiError;

/// How a scheduler seeds the generator it hands to each job run.
///
/// - `Entropy`: fresh OS entropy per run; results differ between runs.
/// - `Seeded`: the same seed for every run; identical inputs give identical output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NoisePolicy {
    #[default]
    Entropy,
    Seeded(u64),
}

impl NoisePolicy {
    pub fn noise(&self) -> RngNoise<StdRng> {
        let rng = match self {
            NoisePolicy::Entropy => StdRng::from_entropy(),
            NoisePolicy::Seeded(seed) => StdRng::seed_from_u64(*seed),
        };
        RngNoise::new(rng)
    }
}

/// Scheduler/executor for AI jobs.
///
/// Every run gets its own generator, so concurrent runs share no mutable state.
pub trait AiScheduler: Send + Sync + 'static {
    fn noise_policy(&self) -> NoisePolicy;

    fn run<J: AiJob>(&self, job: &J) -> Result<J::Output, AiError> {
        let mut noise = self.noise_policy().noise();
        let result = job.run(&mut noise);
        if let Err(e) = &result {
            tracing::warn!(job = job.name(), error = %e, "ai job failed");
        }
        result
    }
}

/// Simple synchronous scheduler that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalAiScheduler {
    policy: NoisePolicy,
}

impl LocalAiScheduler {
    pub fn new(policy: NoisePolicy) -> Self {
        Self { policy }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(NoisePolicy::Seeded(seed))
    }
}

impl AiScheduler for LocalAiScheduler {
    fn noise_policy(&self) -> NoisePolicy {
        self.policy
    }
}
