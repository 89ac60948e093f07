use serde::Serialize;

use saberwing_ai::{Prediction, Summary};
use saberwing_inventory::InventoryItem;
use saberwing_parties::Supplier;
use saberwing_products::SourcingStrategy;

// -------------------------
// Request keys
// -------------------------

/// Top-level key holding the analysis parameters in a predict request.
pub const MACRO_PARAMS_KEY: &str = "macroParams";

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 4],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppliersResponse<'a> {
    pub suppliers: &'a [Supplier],
    pub total_contract_value: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse<'a> {
    pub inventory: &'a [InventoryItem],
    pub total_inventory_value: u64,
    pub item_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeVsBuyResponse<'a> {
    pub strategy: &'a SourcingStrategy,
    /// Millions.
    pub total_make_investment: f64,
    pub make_count: usize,
    pub buy_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
    pub summary: Summary,
    /// The request's parameters exactly as sent (defaults are not filled in).
    pub macro_params: serde_json::Value,
}
