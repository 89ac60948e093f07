use serde::{Deserialize, Serialize};

use saberwing_core::Criticality;
use saberwing_inventory::{InventoryItem, StockStatus};

use crate::job::AiJob;
use crate::macro_params::MacroParams;
use crate::noise::NoiseSource;
use crate::result::AiError;
use crate::stages::{lead_time_prediction, macro_adjustment, need_detection, quantity_calculation};

/// Average parts per aircraft.
pub const BOM_EXPLOSION: f64 = 1.2;

/// Average aircraft built per quarter.
pub const HISTORICAL_CONSUMPTION: f64 = 15.0;

/// Procurement recommendation for one inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub component: String,
    pub supplier: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub recommended_quantity: u64,
    pub need_detected: bool,
    pub lead_time_days: u64,
    pub procurement_cost: u64,
    pub storage_cost: u64,
    pub total_cost: u64,
    pub status: StockStatus,
    pub criticality: Criticality,
    pub unit_cost: u64,
}

/// Run every tier for one item.
///
/// Draw order is fixed: need jitter, quantity residual (only when a need is
/// detected), then lead-time variance.
pub fn predict_item<N: NoiseSource + ?Sized>(
    item: &InventoryItem,
    params: &MacroParams,
    noise: &mut N,
) -> Result<Prediction, AiError> {
    let status = item.stock_status()?;

    let need_detected = need_detection(params.flight_hours, params.test_phase, item.criticality, noise);
    let base_quantity = quantity_calculation(
        need_detected,
        BOM_EXPLOSION,
        HISTORICAL_CONSUMPTION,
        item.criticality,
        noise,
    );
    let recommended_quantity =
        macro_adjustment(base_quantity, params.defense_budget, params.inflation_rate);

    // Lead time is predicted even without a need, for comparison in the UI.
    let lead_time_days = lead_time_prediction(item.lead_time_base, params.conflict_index, noise);

    let procurement_cost = recommended_quantity
        .checked_mul(item.unit_cost)
        .ok_or_else(|| overflow(item, "procurement cost"))?;
    let storage_cost = item
        .storage_cost_per_day
        .checked_mul(lead_time_days)
        .ok_or_else(|| overflow(item, "storage cost"))?;
    let total_cost = procurement_cost
        .checked_add(storage_cost)
        .ok_or_else(|| overflow(item, "total cost"))?;

    tracing::debug!(
        item = %item.id,
        need_detected,
        base_quantity,
        recommended_quantity,
        lead_time_days,
        status = status.as_str(),
        "item forecast"
    );

    Ok(Prediction {
        id: item.id.clone(),
        component: item.component.clone(),
        supplier: item.supplier.clone(),
        current_stock: item.current_stock,
        min_stock: item.min_stock,
        recommended_quantity,
        need_detected,
        lead_time_days,
        procurement_cost,
        storage_cost,
        total_cost,
        status,
        criticality: item.criticality,
        unit_cost: item.unit_cost,
    })
}

fn overflow(item: &InventoryItem, what: &str) -> AiError {
    AiError::InferenceFailed(format!("{what} overflows for inventory item '{}'", item.id))
}

/// Run the full pipeline over `items`, one prediction per item in input order.
///
/// Fails without partial output if any item cannot be forecast.
pub fn run_full_analysis<N: NoiseSource + ?Sized>(
    items: &[InventoryItem],
    params: &MacroParams,
    noise: &mut N,
) -> Result<Vec<Prediction>, AiError> {
    items
        .iter()
        .map(|item| predict_item(item, params, noise))
        .collect()
}

/// Procurement forecast over an inventory snapshot, runnable through an
/// [`AiScheduler`](crate::scheduler::AiScheduler).
#[derive(Debug, Clone)]
pub struct ProcurementForecastJob {
    items: Vec<InventoryItem>,
    params: MacroParams,
}

impl ProcurementForecastJob {
    pub fn new(items: Vec<InventoryItem>, params: MacroParams) -> Self {
        Self { items, params }
    }
}

impl AiJob for ProcurementForecastJob {
    type Input = [InventoryItem];
    type Output = Vec<Prediction>;

    fn name(&self) -> &'static str {
        "ai.procurement_forecast"
    }

    fn input(&self) -> &Self::Input {
        &self.items
    }

    fn run(&self, noise: &mut dyn NoiseSource) -> Result<Self::Output, AiError> {
        run_full_analysis(&self.items, &self.params, noise)
    }
}
