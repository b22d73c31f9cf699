//! Route handlers and router assembly

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sentiment_core::{supported_languages, AnalysisRequest, AnalysisResponse, HealthResponse, AUTO_LANGUAGE};

use crate::{ApiError, AppState};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/languages", get(languages))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET / — service name, version, and entry points.
async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": state.settings.api_title,
        "version": state.settings.api_version,
        "health": "/health",
        "analyze": "/analyze",
        "languages": "/languages",
    }))
}

/// GET /health — static liveness probe.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.api_version.clone(),
    })
}

/// POST /analyze — the full detection → translation → classification
/// pass for one text.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::Validation("text must be non-empty".to_string()));
    }

    metrics::counter!("analyze_requests_total").increment(1);

    // An unset language means "detect", same as the sentinel.
    let source = if request.language.is_empty() || request.language == AUTO_LANGUAGE {
        None
    } else {
        Some(request.language.as_str())
    };

    let outcome = state
        .gateway
        .translate_to_english(&request.text, source)
        .await;

    // Inference is CPU/GPU-bound; keep it off the async workers.
    let analyzer = state.analyzer.clone();
    let classify_input = outcome.text.clone();
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&classify_input))
        .await
        .map_err(|e| ApiError::Analysis(e.to_string()))?
        .map_err(|e| ApiError::Analysis(e.to_string()))?;

    Ok(Json(AnalysisResponse {
        sentiment: analysis.sentiment,
        confidence: analysis.confidence,
        scores: analysis.scores,
        original_text: request.text,
        translated_text: outcome.was_translated.then(|| outcome.text),
        detected_language: Some(outcome.language),
        was_translated: outcome.was_translated,
    }))
}

/// GET /languages — the static code → display-name table.
async fn languages() -> Json<Value> {
    let table: serde_json::Map<String, Value> = supported_languages()
        .iter()
        .map(|(code, name)| ((*code).to_string(), Value::String((*name).to_string())))
        .collect();

    Json(json!({
        "count": table.len(),
        "supported_languages": table,
    }))
}

/// GET /metrics — Prometheus exposition, empty when no recorder is
/// installed.
async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.as_ref().map(|h| h.render()).unwrap_or_default()
}
