//! HTTP endpoint server using Axum

use axum::{
    body::Bytes,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::models::signal::PredictionResponse;
use crate::models::stats::StatsSnapshot;
use crate::signals::engine::SignalEngine;
use crate::store::FeedbackOutcome;

pub const SERVICE_NAME: &str = "optrix-signal-engine";

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SignalEngine>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(engine: Arc<SignalEngine>, metrics: Arc<Metrics>) -> Self {
        Self {
            engine,
            metrics,
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Error body returned as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidRequest(message) => Self::bad_request(message),
            EngineError::Computation(message) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request("No data provided"));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("malformed JSON: {}", e)))
}

/// Evaluate one indicator snapshot.
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    let payload = parse_body(&body)?;
    let response = state.engine.predict(&payload)?;

    state.metrics.record_signal(response.signal());
    if response.is_degraded() {
        state.metrics.signal_evaluation_failures_total.inc();
    }
    info!(
        signal = %response.signal(),
        confidence = response.confidence(),
        "Prediction served"
    );

    Ok(Json(response))
}

/// Labels are taken as-is; anything other than a string reads as missing.
#[derive(Debug, Deserialize)]
struct FeedbackRequest {
    #[serde(default)]
    predicted_signal: Value,
    #[serde(default)]
    actual_outcome: Value,
}

/// Record whether an earlier prediction turned out correct.
async fn update_accuracy(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let payload = parse_body(&body)?;
    let request: FeedbackRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("invalid feedback: {}", e)))?;

    let outcome = FeedbackOutcome::from_label(request.actual_outcome.as_str());
    state
        .engine
        .record_feedback(request.predicted_signal.as_str(), outcome);

    Ok(Json(json!({ "message": "Accuracy updated successfully" })))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let health = state.engine.health();
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "model_loaded": true,
        "total_signals": health.total_signals,
        "accuracy": health.accuracy,
        "pattern_weights": health.pattern_weights,
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "service": SERVICE_NAME,
    }))
}

async fn get_stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.engine.stats())
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state.metrics.export().map_err(|e| {
        error!(error = %e, "Failed to export metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/update_accuracy", post(update_accuracy))
        .route("/health", get(health_check))
        .route("/get_stats", get(get_stats))
        .route("/metrics", get(metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new()?);
    let engine = Arc::new(SignalEngine::new(config.engine.clone()));
    let app = create_router(AppState::new(engine, metrics));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
