use serde::{Deserialize, Serialize};

use saberwing_core::{DomainError, DomainResult};

/// Flight-test regime, scaling how quickly components wear.
///
/// Phases outside the known set deserialize to [`TestPhase::Unrecognized`] and
/// are treated as `Normal` intensity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestPhase {
    #[default]
    Normal,
    #[serde(rename = "High-G")]
    HighG,
    Weapons,
    Carrier,
    #[serde(other)]
    Unrecognized,
}

/// Macroeconomic and flight-test inputs for one analysis run.
///
/// Absent fields take the documented defaults. Ranges are checked by
/// [`MacroParams::validate`]; the estimator assumes that already happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroParams {
    /// Geopolitical tension on a 1–10 scale.
    pub conflict_index: f64,
    /// Annual inflation, percent (0–15).
    pub inflation_rate: f64,
    /// Defense budget, billions (50–200).
    pub defense_budget: f64,
    /// Cumulative flight-test hours.
    pub flight_hours: f64,
    pub test_phase: TestPhase,
}

impl Default for MacroParams {
    fn default() -> Self {
        Self {
            conflict_index: 5.0,
            inflation_rate: 3.0,
            defense_budget: 100.0,
            flight_hours: 250.0,
            test_phase: TestPhase::Normal,
        }
    }
}

impl MacroParams {
    pub fn validate(&self) -> DomainResult<()> {
        if !(1.0..=10.0).contains(&self.conflict_index) {
            return Err(DomainError::validation("conflictIndex must be between 1 and 10"));
        }
        if !(0.0..=15.0).contains(&self.inflation_rate) {
            return Err(DomainError::validation("inflationRate must be between 0 and 15"));
        }
        if !(50.0..=200.0).contains(&self.defense_budget) {
            return Err(DomainError::validation("defenseBudget must be between 50 and 200"));
        }
        if !(self.flight_hours.is_finite() && self.flight_hours >= 0.0) {
            return Err(DomainError::validation("flightHours must be a non-negative number"));
        }
        Ok(())
    }
}
