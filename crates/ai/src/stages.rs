//! The estimator tiers.
//!
//! Each stage is a free function over explicit inputs. Policy constants live
//! in the lookup functions below so they can be checked against the published
//! tables independently of the noise.

use saberwing_core::Criticality;

use crate::macro_params::TestPhase;
use crate::noise::NoiseSource;

/// Half-width of the uniform jitter added to the need score.
pub const NEED_SCORE_JITTER: f64 = 0.1;

/// Need scores strictly above this trigger a reorder.
pub const NEED_DECISION_BOUNDARY: f64 = 0.5;

/// Standard deviation of the relative quantity residual.
pub const QUANTITY_RESIDUAL_STD: f64 = 0.1;

/// Smallest quantity ordered once a need is detected.
pub const MIN_ORDER_QUANTITY: u64 = 2;

/// Minimum order quantity enforced for high-criticality parts.
pub const HIGH_CRITICALITY_MOQ: u64 = 5;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Exponent of the convex conflict scaling. Must stay exactly 1.8.
pub const CONFLICT_EXPONENT: f64 = 1.8;

pub const CONFLICT_WEIGHT: f64 = 2.0;

/// Lead-time variance factor range `[low, high)`.
pub const LEAD_TIME_VARIANCE: (f64, f64) = (0.85, 1.15);

/// Approximates a 75th-percentile lead time instead of the mean.
pub const QUANTILE_ADJUSTMENT: f64 = 1.1;

/// Flight-hour threshold above which wear accelerates.
pub fn need_threshold(criticality: Criticality) -> f64 {
    match criticality {
        Criticality::High => 100.0,
        Criticality::Medium => 200.0,
        Criticality::Low => 300.0,
        Criticality::Unrecognized => 200.0,
    }
}

pub fn phase_multiplier(phase: TestPhase) -> f64 {
    match phase {
        TestPhase::Normal => 1.0,
        TestPhase::HighG => 1.4,
        TestPhase::Weapons => 1.25,
        TestPhase::Carrier => 1.3,
        TestPhase::Unrecognized => 1.0,
    }
}

pub fn safety_factor(criticality: Criticality) -> f64 {
    match criticality {
        Criticality::High => 1.5,
        Criticality::Medium => 1.3,
        Criticality::Low => 1.15,
        Criticality::Unrecognized => 1.2,
    }
}

/// Need score before phase scaling and jitter.
///
/// Above the threshold the score is capped at 0.9. At or below it the score is
/// the plain ratio and is deliberately left uncapped.
pub fn base_need_score(flight_hours: f64, threshold: f64) -> f64 {
    if flight_hours > threshold {
        (0.5 + (flight_hours - threshold) / threshold).min(0.9)
    } else {
        flight_hours / threshold
    }
}

/// Tier 1: decide whether a component needs ordering.
///
/// Consumes exactly one uniform draw.
pub fn need_detection<N: NoiseSource + ?Sized>(
    flight_hours: f64,
    test_phase: TestPhase,
    criticality: Criticality,
    noise: &mut N,
) -> bool {
    let threshold = need_threshold(criticality);
    let mut score = base_need_score(flight_hours, threshold);
    score *= phase_multiplier(test_phase);
    score += noise.uniform(-NEED_SCORE_JITTER, NEED_SCORE_JITTER);
    score > NEED_DECISION_BOUNDARY
}

/// Tier 2: recommended order quantity before macro adjustment.
///
/// Returns 0 without drawing when no need was detected.
pub fn quantity_calculation<N: NoiseSource + ?Sized>(
    need_detected: bool,
    bom_explosion: f64,
    historical_consumption: f64,
    criticality: Criticality,
    noise: &mut N,
) -> u64 {
    if !need_detected {
        return 0;
    }

    let base = bom_explosion * historical_consumption * safety_factor(criticality);
    let residual = noise.normal(0.0, QUANTITY_RESIDUAL_STD) * base;
    let adjusted = (base + residual).ceil();

    // Negative or NaN adjusted values saturate to 0 and are lifted to the floor.
    let quantity = (adjusted as u64).max(MIN_ORDER_QUANTITY);

    if criticality == Criticality::High && quantity < HIGH_CRITICALITY_MOQ {
        return HIGH_CRITICALITY_MOQ;
    }
    quantity
}

/// Macro layer: scale demand by defense budget (100B = 1.0x) and hedge
/// against inflation at half the inflation rate.
pub fn macro_adjustment(base_demand: u64, defense_budget: f64, inflation_rate: f64) -> u64 {
    let spending_multiplier = defense_budget / 100.0;
    let inflation_adjustment = 1.0 + (inflation_rate / 100.0) * 0.5;
    let adjusted = base_demand as f64 * spending_multiplier * inflation_adjustment;
    adjusted.ceil() as u64
}

/// `1 + (conflict/10)^1.8 × 2`.
pub fn conflict_multiplier(conflict_index: f64) -> f64 {
    let normalized = conflict_index / 10.0;
    1.0 + normalized.powf(CONFLICT_EXPONENT) * CONFLICT_WEIGHT
}

/// Tier 3: conflict-scaled lead time in days.
///
/// Consumes exactly one uniform draw. Rounds half to even.
pub fn lead_time_prediction<N: NoiseSource + ?Sized>(
    base_lead_time_months: u32,
    conflict_index: f64,
    noise: &mut N,
) -> u64 {
    let base_days = f64::from(base_lead_time_months) * DAYS_PER_MONTH;
    let mut days = base_days * conflict_multiplier(conflict_index);
    days *= noise.uniform(LEAD_TIME_VARIANCE.0, LEAD_TIME_VARIANCE.1);
    days *= QUANTILE_ADJUSTMENT;
    days.round_ties_even() as u64
}
