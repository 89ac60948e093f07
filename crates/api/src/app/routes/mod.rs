use axum::{
    routing::{get, post},
    Router,
};

pub mod catalog;
pub mod predict;
pub mod system;

/// Router for the `/api` endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/suppliers", get(catalog::get_suppliers))
        .route("/inventory", get(catalog::get_inventory))
        .route("/make-vs-buy", get(catalog::get_make_vs_buy))
        .route("/ml-predict", post(predict::ml_predict))
}
