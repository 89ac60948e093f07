//! Procurement analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use saberwing_ai::MacroParams;

use crate::app::dto::{self, MACRO_PARAMS_KEY};
use crate::app::errors;
use crate::app::services::AppServices;

/// Run the estimator over the inventory catalog.
///
/// Request body: `{"macroParams": {"conflictIndex": 7, "inflationRate": 5.5,
/// "defenseBudget": 120, "flightHours": 350, "testPhase": "High-G"}}`.
/// Every parameter is optional; out-of-range values are rejected before the
/// estimator runs.
pub async fn ml_predict(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text());
        }
    };

    let raw_params = match body.get(MACRO_PARAMS_KEY) {
        Some(v) => v.clone(),
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "missing_macro_params",
                "Missing macroParams in request",
            );
        }
    };

    let params: MacroParams = match serde_json::from_value(raw_params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_macro_params", e.to_string());
        }
    };

    if let Err(e) = params.validate() {
        tracing::warn!(error = %e, "rejected macro parameters");
        return errors::domain_error_to_response(e);
    }

    let (predictions, summary) = match services.run_analysis(params) {
        Ok(out) => out,
        Err(e) => return errors::ai_error_to_response(e),
    };

    tracing::info!(
        items = predictions.len(),
        total_cost = summary.total_cost,
        total_quantity = summary.total_quantity,
        critical_items = summary.critical_items,
        "procurement analysis completed"
    );

    (
        StatusCode::OK,
        Json(dto::PredictResponse {
            predictions,
            summary,
            macro_params: raw_params,
        }),
    )
        .into_response()
}
