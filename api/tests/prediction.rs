mod common;

use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use common::{TestConfig, closed_addr, spawn_upstream, test_server};

fn sample_measurements() -> Value {
    json!({
        "N": 90,
        "P": 42,
        "K": 43,
        "temperature": 20.8,
        "humidity": 82,
        "ph": 6.5,
        "rainfall": 202.9
    })
}

/// Prediction service stand-in recording every body it receives.
async fn recording_ml_service(received: Arc<Mutex<Vec<Value>>>) -> String {
    let router = Router::new().route(
        "/predict",
        post(move |Json(body): Json<Value>| {
            let received = received.clone();
            async move {
                received.lock().unwrap().push(body);
                Json(json!({ "crop": "rice", "confidence": 0.93, "extra": [1, 2] }))
            }
        }),
    );
    format!("http://{}/predict", spawn_upstream(router).await)
}

#[tokio::test]
async fn test_predict_relays_ml_response_verbatim() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let server = test_server(TestConfig {
        ml_service_url: recording_ml_service(received.clone()).await,
        ..TestConfig::default()
    });

    let response = server.post("/predict").json(&sample_measurements()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "crop": "rice", "confidence": 0.93, "extra": [1, 2] })
    );
    assert_eq!(*received.lock().unwrap(), vec![sample_measurements()]);
}

#[tokio::test]
async fn test_predict_does_not_validate_payload() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let server = test_server(TestConfig {
        ml_service_url: recording_ml_service(received.clone()).await,
        ..TestConfig::default()
    });

    let odd = json!({ "N": 9000, "note": "left as is" });
    let response = server.post("/predict").json(&odd).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(*received.lock().unwrap(), vec![odd]);
}

#[tokio::test]
async fn test_predict_reports_unreachable_ml_service() {
    let server = test_server(TestConfig {
        ml_service_url: format!("http://{}/predict", closed_addr().await),
        ..TestConfig::default()
    });

    let response = server.post("/predict").json(&sample_measurements()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error communicating with ML service" })
    );
}

#[tokio::test]
async fn test_predict_reports_ml_service_error_status() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "bad features") }),
    );
    let server = test_server(TestConfig {
        ml_service_url: format!("http://{}/predict", spawn_upstream(router).await),
        ..TestConfig::default()
    });

    let response = server.post("/predict").json(&sample_measurements()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "Error communicating with ML service"
    );
}

#[tokio::test]
async fn test_measurement_fields_lists_contract() {
    let server = test_server(TestConfig::default());

    let response = server.get("/measurement-fields").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let fields = body["data"].as_array().unwrap();
    assert_eq!(fields.len(), 7);
    let keys: Vec<&str> = fields.iter().map(|f| f["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec!["N", "P", "K", "temperature", "humidity", "ph", "rainfall"]
    );
    assert_eq!(fields[5]["min"], 3.5);
    assert_eq!(fields[5]["max"], 9.5);
}

#[tokio::test]
async fn test_validate_measurements_accepts_valid_form() {
    let server = test_server(TestConfig::default());

    let response = server
        .post("/measurements/validate")
        .json(&sample_measurements())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "valid": true, "errors": {} })
    );
}

#[tokio::test]
async fn test_validate_measurements_reports_each_field() {
    let server = test_server(TestConfig::default());

    let form = json!({
        "N": "150",
        "P": 0,
        "K": "abc",
        "temperature": 7,
        "humidity": 100,
        "ph": 9.5
    });
    let response = server.post("/measurements/validate").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["valid"], false);
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors["N"].as_str().unwrap().contains("cannot exceed 140"));
    assert!(errors["K"].as_str().unwrap().ends_with("must be a valid number"));
    assert!(errors["temperature"].as_str().unwrap().contains("must be at least 8"));
    assert!(errors["rainfall"].as_str().unwrap().ends_with("is required"));
}

#[tokio::test]
async fn test_health() {
    let server = test_server(TestConfig::default());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_root_path_prefixes_routes() {
    let server = test_server(TestConfig {
        root_path: "/api".to_string(),
        ..TestConfig::default()
    });

    assert_eq!(server.get("/api/health").await.status_code(), StatusCode::OK);
    assert_eq!(
        server.get("/api/measurement-fields").await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        server.get("/health").await.status_code(),
        StatusCode::NOT_FOUND
    );
}
