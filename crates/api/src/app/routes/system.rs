use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::HomeResponse;

pub const SERVICE_NAME: &str = "SaberWing Command API";
pub const SERVICE_VERSION: &str = "2.0";

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Service banner listing the available endpoints.
pub async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        status: "online",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        endpoints: [
            "/api/suppliers",
            "/api/inventory",
            "/api/make-vs-buy",
            "/api/ml-predict [POST]",
        ],
    })
}
