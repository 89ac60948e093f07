//! Read-only reference data: suppliers, inventory, make-vs-buy strategy.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use saberwing_inventory::total_inventory_value;
use saberwing_parties::total_contract_value;
use saberwing_products::total_make_investment;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn get_suppliers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let suppliers = services.suppliers();
    let total_contract_value = match total_contract_value(suppliers) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = dto::SuppliersResponse {
        suppliers,
        total_contract_value,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_inventory(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let inventory = services.inventory();
    let total_inventory_value = match total_inventory_value(inventory) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = dto::InventoryResponse {
        inventory,
        total_inventory_value,
        item_count: inventory.len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_make_vs_buy(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let strategy = services.strategy();
    let total_make_investment = match total_make_investment(&strategy.make) {
        Ok(v) => v,
        Err(e) => {
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "invalid_catalog", e.to_string());
        }
    };
    let body = dto::MakeVsBuyResponse {
        strategy,
        total_make_investment,
        make_count: strategy.make.len(),
        buy_count: strategy.buy.len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
