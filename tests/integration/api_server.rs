//! Integration tests for the API Server
//!
//! Tests prediction, feedback, stats, health checks and metrics.


use serde_json::{json, Value};

use test_utils::TestApiServer;

fn bullish_snapshot() -> Value {
    json!([{
        "RSI": {"rsi": 50, "status": "Neutral"},
        "EMA20": {"status": "Bullish"},
        "SMA50": {"status": "Bullish"},
        "SuperTrend": {"status": "Bullish"},
        "VIX": {"vix": 10},
    }])
}

#[tokio::test]
async fn predict_returns_signal_and_analysis() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/predict").json(&bullish_snapshot()).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["signal"], "BUY_CE");
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(body["analysis"]["vix_condition"], "LOW_VOLATILITY");
    assert_eq!(body["analysis"]["market_regime"], "LOW_VOLATILITY");
    assert_eq!(body["analysis"]["signal_count"], 9);
    assert!(body["analysis"]["detected_signals"]
        .as_array()
        .unwrap()
        .contains(&json!("SUPERTREND_BULLISH")));
    assert!(body["timestamp"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn predict_accepts_bare_record() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/predict").json(&json!({"LTP": 100})).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["signal"], "HOLD");
    assert_eq!(body["confidence"], 0.0);
    assert_eq!(body["analysis"]["ltp"], 100.0);
}

#[tokio::test]
async fn predict_degrades_to_hold_on_bad_number() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!([{"VIX": {"vix": "high"}}]))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["signal"], "HOLD");
    assert_eq!(body["confidence"], 0.0);
    assert!(body["error"].as_str().unwrap().contains("VIX.vix"));
    assert_eq!(app.engine.history_len(), 0);
}

#[tokio::test]
async fn predict_rejects_missing_body() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/predict").expect_failure().await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn predict_rejects_empty_snapshot() {
    let app = TestApiServer::new().await;
    for payload in [json!({}), json!([]), json!(null)] {
        let response = app
            .server
            .post("/predict")
            .json(&payload)
            .expect_failure()
            .await;
        assert_eq!(response.status_code(), 400);
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn predict_rejects_malformed_json() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/predict")
        .text("{\"RSI\": ")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("malformed JSON"));
}

#[tokio::test]
async fn update_accuracy_feeds_stats() {
    let app = TestApiServer::new().await;

    for outcome in ["correct", "correct", "incorrect"] {
        let response = app
            .server
            .post("/update_accuracy")
            .json(&json!({"predicted_signal": "BUY_CE", "actual_outcome": outcome}))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: Value = response.json();
        assert_eq!(body["message"], "Accuracy updated successfully");
    }

    let body: Value = app.server.get("/get_stats").await.json();
    assert_eq!(body["total_predictions"], 3);
    assert_eq!(body["correct_predictions"], 2);
    assert_eq!(body["accuracy"], 0.667);
}

#[tokio::test]
async fn update_accuracy_rejects_missing_body() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/update_accuracy").expect_failure().await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(app.engine.stats().total_predictions, 0);
}

#[tokio::test]
async fn update_accuracy_without_outcome_counts_as_incorrect() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/update_accuracy")
        .json(&json!({"predicted_signal": "HOLD"}))
        .await;
    assert_eq!(response.status_code(), 200);

    let stats = app.engine.stats();
    assert_eq!(stats.total_predictions, 1);
    assert_eq!(stats.correct_predictions, 0);
}

#[tokio::test]
async fn update_accuracy_treats_non_string_outcome_as_incorrect() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/update_accuracy")
        .json(&json!({"predicted_signal": 7, "actual_outcome": 1}))
        .await;
    assert_eq!(response.status_code(), 200);

    let stats = app.engine.stats();
    assert_eq!(stats.total_predictions, 1);
    assert_eq!(stats.correct_predictions, 0);
}

#[tokio::test]
async fn stored_snapshot_can_be_posted_back() {
    let app = TestApiServer::new().await;
    let first: Value = app
        .server
        .post("/predict")
        .json(&json!({"LTP": 100, "RSI": {"rsi": 30}, "ADX": {"value": 30}, "EMA20": {"ema": 90}}))
        .await
        .json();

    let stats: Value = app.server.get("/get_stats").await.json();
    let stored = stats["recent_signals"][0]["snapshot"].clone();
    let second: Value = app.server.post("/predict").json(&json!([stored])).await.json();

    assert_eq!(second["signal"], first["signal"]);
    assert_eq!(second["confidence"], first["confidence"]);
    assert_eq!(
        second["analysis"]["detected_signals"],
        first["analysis"]["detected_signals"]
    );
    assert_eq!(
        second["analysis"]["total_strength"],
        first["analysis"]["total_strength"]
    );
}

#[tokio::test]
async fn get_stats_lists_recent_signals() {
    let app = TestApiServer::new().await;
    for ltp in 0..12 {
        app.server
            .post("/predict")
            .json(&json!({"LTP": ltp}))
            .await;
    }

    let response = app.server.get("/get_stats").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let recent = body["recent_signals"].as_array().unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[9]["snapshot"]["LTP"], 11.0);
    assert_eq!(recent[9]["signal"], "HOLD");
    assert_eq!(body["pattern_weights"]["rsi_neutral"], 0.6);
    assert_eq!(body["accuracy"], 0.0);
}

#[tokio::test]
async fn health_endpoint_reports_engine_state() {
    let app = TestApiServer::new().await;
    app.server.post("/predict").json(&json!([{}])).await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["total_signals"], 1);
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "optrix-signal-engine");
    assert!(body["pattern_weights"].is_object());
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    app.server.post("/predict").json(&bullish_snapshot()).await;
    app.server
        .post("/predict")
        .json(&json!([{"RSI": {"rsi": [1, 2]}}]))
        .await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for metric in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
        "signals_generated_total",
        "signal_evaluation_failures_total 1",
    ] {
        assert!(body.contains(metric), "Expected {} in metrics output", metric);
    }
    assert!(body.contains("signal=\"BUY_CE\""));
    assert!(body.contains("signal=\"HOLD\""));
}

#[tokio::test]
async fn api_server_handles_sequential_requests() {
    let app = TestApiServer::new().await;
    for _ in 0..10 {
        let response = app.server.post("/predict").json(&bullish_snapshot()).await;
        assert_eq!(response.status_code(), 200);
    }
    assert_eq!(app.engine.history_len(), 10);
}
