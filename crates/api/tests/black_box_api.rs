use reqwest::StatusCode;
use serde_json::{json, Value};

use saberwing_ai::{LocalAiScheduler, NoisePolicy};
use saberwing_api::app::{build_app, build_app_with_services, AppServices};
use saberwing_api::config::ApiConfig;
use saberwing_inventory::inventory_catalog;
use saberwing_parties::supplier_catalog;
use saberwing_products::sourcing_strategy;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: axum::Router) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn default() -> Self {
        Self::spawn(build_app(&ApiConfig::default())).await
    }

    async fn seeded(seed: u64) -> Self {
        let config = ApiConfig {
            estimator_seed: Some(seed),
            ..ApiConfig::default()
        };
        Self::spawn(build_app(&config)).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn predict(srv: &TestServer, body: Value) -> (StatusCode, Value) {
    let res = reqwest::Client::new()
        .post(format!("{}/api/ml-predict", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn home_lists_endpoints() {
    let srv = TestServer::default().await;
    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "online");
    assert_eq!(body["service"], "SaberWing Command API");
    assert_eq!(body["version"], "2.0");
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 4);

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn suppliers_include_total_contract_value() {
    let srv = TestServer::default().await;
    let body: Value = reqwest::get(format!("{}/api/suppliers", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["suppliers"].as_array().unwrap().len(), 6);
    assert_eq!(body["suppliers"][0]["name"], "GE Aerospace");
    assert_eq!(body["totalContractValue"], 613_000_000u64);
}

#[tokio::test]
async fn inventory_includes_value_and_count() {
    let srv = TestServer::default().await;
    let body: Value = reqwest::get(format!("{}/api/inventory", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["itemCount"], 6);
    assert_eq!(body["totalInventoryValue"], 409_960_000u64);
    assert_eq!(body["inventory"][0]["id"], "engines");
    assert_eq!(body["inventory"][0]["criticality"], "high");
}

#[tokio::test]
async fn make_vs_buy_reports_investment_in_millions() {
    let srv = TestServer::default().await;
    let body: Value = reqwest::get(format!("{}/api/make-vs-buy", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["makeCount"], 5);
    assert_eq!(body["buyCount"], 6);
    assert_eq!(body["totalMakeInvestment"].as_f64().unwrap(), 160.0);
    assert_eq!(body["strategy"]["make"][0]["teamSize"], "25-30 engineers");
    assert_eq!(body["strategy"]["buy"][0]["model"], "F414-GE-400");
}

#[tokio::test]
async fn predict_returns_predictions_summary_and_echo() {
    let srv = TestServer::default().await;
    let params = json!({
        "conflictIndex": 7,
        "inflationRate": 5.5,
        "defenseBudget": 120,
        "flightHours": 350,
        "testPhase": "High-G"
    });
    let (status, body) = predict(&srv, json!({ "macroParams": params })).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["macroParams"], params);

    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 6);

    let mut procurement = 0u64;
    let mut quantity = 0u64;
    for p in predictions {
        let q = p["recommendedQuantity"].as_u64().unwrap();
        let cost = p["procurementCost"].as_u64().unwrap();
        assert_eq!(cost, q * p["unitCost"].as_u64().unwrap());
        assert_eq!(
            p["totalCost"].as_u64().unwrap(),
            cost + p["storageCost"].as_u64().unwrap()
        );
        if !p["needDetected"].as_bool().unwrap() {
            assert_eq!(q, 0);
        }
        procurement += cost;
        quantity += q;
    }
    assert_eq!(body["summary"]["totalProcurementCost"].as_u64().unwrap(), procurement);
    assert_eq!(body["summary"]["totalQuantity"].as_u64().unwrap(), quantity);
    assert_eq!(body["summary"]["criticalItems"], 0);
}

#[tokio::test]
async fn predict_fills_defaults_but_echoes_input_as_sent() {
    let srv = TestServer::default().await;
    let (status, body) = predict(&srv, json!({ "macroParams": {} })).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["macroParams"], json!({}));
    assert_eq!(body["predictions"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn predict_requires_macro_params() {
    let srv = TestServer::default().await;
    let (status, body) = predict(&srv, json!({ "params": {} })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing_macro_params");
    assert_eq!(body["message"], "Missing macroParams in request");
}

#[tokio::test]
async fn predict_rejects_malformed_json() {
    let srv = TestServer::default().await;
    let res = reqwest::Client::new()
        .post(format!("{}/api/ml-predict", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_json");
}

#[tokio::test]
async fn predict_rejects_wrongly_typed_params() {
    let srv = TestServer::default().await;
    let (status, body) = predict(&srv, json!({ "macroParams": { "conflictIndex": "high" } })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_macro_params");
}

#[tokio::test]
async fn predict_rejects_out_of_range_params() {
    let srv = TestServer::default().await;
    let cases = [
        (json!({ "conflictIndex": 0 }), "conflictIndex must be between 1 and 10"),
        (json!({ "conflictIndex": 11 }), "conflictIndex must be between 1 and 10"),
        (json!({ "inflationRate": 16 }), "inflationRate must be between 0 and 15"),
        (json!({ "defenseBudget": 40 }), "defenseBudget must be between 50 and 200"),
        (json!({ "flightHours": -5 }), "flightHours must be a non-negative number"),
    ];
    for (params, message) in cases {
        let (status, body) = predict(&srv, json!({ "macroParams": params })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{params}");
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn unknown_test_phase_is_accepted() {
    let srv = TestServer::default().await;
    let (status, body) = predict(&srv, json!({ "macroParams": { "testPhase": "Arctic" } })).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["macroParams"]["testPhase"], "Arctic");
}

#[tokio::test]
async fn seeded_server_returns_identical_analyses() {
    let srv = TestServer::seeded(1234).await;
    let request = json!({ "macroParams": { "conflictIndex": 9, "flightHours": 180 } });
    let (s1, first) = predict(&srv, request.clone()).await;
    let (s2, second) = predict(&srv, request).await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn invalid_catalog_data_fails_the_whole_request() {
    let mut inventory = inventory_catalog().to_vec();
    inventory[1].min_stock = 0;
    let services = AppServices::new(
        inventory,
        supplier_catalog().to_vec(),
        sourcing_strategy().clone(),
        LocalAiScheduler::new(NoisePolicy::Seeded(1)),
    );
    let srv = TestServer::spawn(build_app_with_services(services)).await;

    let (status, body) = predict(&srv, json!({ "macroParams": {} })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "analysis_failed");
    assert!(body["message"].as_str().unwrap().contains("radars"));
    assert!(body.get("predictions").is_none());
}

#[tokio::test]
async fn empty_inventory_summarizes_to_zero() {
    let services = AppServices::new(
        Vec::new(),
        supplier_catalog().to_vec(),
        sourcing_strategy().clone(),
        LocalAiScheduler::default(),
    );
    let srv = TestServer::spawn(build_app_with_services(services)).await;

    let (status, body) = predict(&srv, json!({ "macroParams": {} })).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["predictions"], json!([]));
    assert_eq!(body["summary"]["totalCost"], 0);
    assert_eq!(body["summary"]["averageLeadTime"], 0);
}

#[tokio::test]
async fn cors_allows_browser_origins() {
    let srv = TestServer::default().await;
    let res = reqwest::Client::new()
        .get(format!("{}/api/suppliers", srv.base_url))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn oversized_totals_are_reported_not_wrapped() {
    let mut inventory = inventory_catalog()[..2].to_vec();
    for item in &mut inventory {
        item.unit_cost = 600_000_000_000_000_000;
    }
    let mut suppliers = supplier_catalog().to_vec();
    suppliers[0].contract_value = u64::MAX;
    let services = AppServices::new(
        inventory,
        suppliers,
        sourcing_strategy().clone(),
        LocalAiScheduler::new(NoisePolicy::Seeded(3)),
    );
    let srv = TestServer::spawn(build_app_with_services(services)).await;

    // Both high-criticality items need stock; the order totals cannot fit in u64.
    let (status, body) = predict(&srv, json!({ "macroParams": { "flightHours": 1000 } })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "analysis_failed");

    for path in ["suppliers", "inventory"] {
        let res = reqwest::get(format!("{}/api/{path}", srv.base_url)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invariant_violation");
    }
}
