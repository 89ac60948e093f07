use crate::noise::NoiseSource;
use crate::result::AiError;

/// A unit of estimator work.
///
/// Jobs consume an input snapshot provided by the caller and draw all of their
/// randomness from the supplied [`NoiseSource`]. This crate stays
/// storage-agnostic: inputs are provided by callers (API handlers, benches).
pub trait AiJob: Send + Sync + 'static {
    type Input: ?Sized;
    type Output;

    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// The input snapshot the job will run on.
    fn input(&self) -> &Self::Input;

    /// Execute the job.
    ///
    /// Must not mutate the input.
    fn run(&self, noise: &mut dyn NoiseSource) -> Result<Self::Output, AiError>;
}
