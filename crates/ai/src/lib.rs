//! `saberwing-ai`
//!
//! **Responsibility:** the procurement estimator.
//!
//! The estimator imitates a tiered ML pipeline with hand-written formulas and
//! injected noise; nothing is trained or persisted:
//! - Tier 1 (`need_detection`): should the component be reordered at all?
//! - Tier 2 (`quantity_calculation`): how many units, with safety stock and MOQ.
//! - Macro layer (`macro_adjustment`): budget and inflation scaling.
//! - Tier 3 (`lead_time_prediction`): conflict-scaled, conservative lead time.
//!
//! Every stage is a pure function of its inputs plus an explicit
//! [`NoiseSource`]; it never touches ambient random state.

pub mod forecast;
pub mod job;
pub mod macro_params;
pub mod noise;
pub mod result;
pub mod scheduler;
pub mod stages;
pub mod summary;

pub use forecast::{run_full_analysis, Prediction, ProcurementForecastJob, BOM_EXPLOSION, HISTORICAL_CONSUMPTION};
pub use job::AiJob;
pub use macro_params::{MacroParams, TestPhase};
pub use noise::{NeutralNoise, NoiseSource, RngNoise};
pub use result::AiError;
pub use scheduler::{AiScheduler, LocalAiScheduler, NoisePolicy};
pub use stages::{lead_time_prediction, macro_adjustment, need_detection, quantity_calculation};
pub use summary::{calculate_summary, Summary};
