use serde::{Deserialize, Serialize};

use saberwing_inventory::StockStatus;

use crate::forecast::Prediction;
use crate::result::AiError;

/// Aggregate totals over one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_procurement_cost: u64,
    pub total_storage_cost: u64,
    pub total_cost: u64,
    pub total_quantity: u64,
    pub critical_items: usize,
    /// Mean lead time in days, truncated. Zero when there are no predictions.
    pub average_lead_time: u64,
}

/// Aggregate `predictions`.
///
/// Fails instead of wrapping when a total exceeds `u64`.
pub fn calculate_summary(predictions: &[Prediction]) -> Result<Summary, AiError> {
    if predictions.is_empty() {
        return Ok(Summary::default());
    }

    let total_procurement_cost = checked_total(predictions, "procurement cost", |p| p.procurement_cost)?;
    let total_storage_cost = checked_total(predictions, "storage cost", |p| p.storage_cost)?;
    let total_quantity = checked_total(predictions, "quantity", |p| p.recommended_quantity)?;
    let lead_time_sum = checked_total(predictions, "lead time", |p| p.lead_time_days)?;
    let total_cost = total_procurement_cost
        .checked_add(total_storage_cost)
        .ok_or_else(|| overflow("cost"))?;
    let critical_items = predictions
        .iter()
        .filter(|p| p.status == StockStatus::Critical)
        .count();

    Ok(Summary {
        total_procurement_cost,
        total_storage_cost,
        total_cost,
        total_quantity,
        critical_items,
        average_lead_time: lead_time_sum / predictions.len() as u64,
    })
}

fn checked_total(
    predictions: &[Prediction],
    what: &str,
    field: impl Fn(&Prediction) -> u64,
) -> Result<u64, AiError> {
    predictions
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(field(p)))
        .ok_or_else(|| overflow(what))
}

fn overflow(what: &str) -> AiError {
    AiError::InferenceFailed(format!("total {what} overflows"))
}
