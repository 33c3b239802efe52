//! HTTP API for Carousel
//!
//! Endpoints:
//! - POST /api/parse-newsletter       - AI first (if enabled), rules fallback
//! - POST /api/parse-newsletter/rules - Rule-based segmenter only
//! - GET  /api/slide-types            - Slide types with labels and templates
//! - GET  /health                     - Health check

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::core::Orchestrator;
use crate::types::{AnimationStyle, GradientStyle, ParseOutcome, SlideType};

/// Shared server state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    /// Feature flag used when a request does not say
    pub prefer_ai: bool,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator, prefer_ai: bool) -> Self {
        Self { orchestrator, prefer_ai }
    }
}

/// Successful parse response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    #[serde(flatten)]
    pub outcome: ParseOutcome,
    /// True when the rule-based segmenter produced the slides
    pub fallback: bool,
}

/// Boundary rejection
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fallback: bool,
}

/// Slide type catalog entry
#[derive(Debug, Serialize)]
pub struct SlideTypeInfo {
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub label: &'static str,
    pub description: &'static str,
    pub gradient: GradientStyle,
    pub animation: AnimationStyle,
}

/// Health response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ai_enabled: bool,
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/slide-types", get(slide_types))
        .route("/api/parse-newsletter", post(parse_newsletter))
        .route("/api/parse-newsletter/rules", post(parse_newsletter_rules))
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        ai_enabled: state.orchestrator.has_ai(),
    })
}

/// Slide type catalog
async fn slide_types() -> Json<Vec<SlideTypeInfo>> {
    let types = SlideType::ALL
        .into_iter()
        .map(|t| {
            let template = t.template();
            SlideTypeInfo {
                slide_type: t,
                label: t.label(),
                description: t.description(),
                gradient: template.gradient,
                animation: template.animation,
            }
        })
        .collect();
    Json(types)
}

/// Parse with the configured strategy policy
async fn parse_newsletter(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let (content, prefer_ai) = match read_request(body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };
    let prefer_ai = prefer_ai.unwrap_or(state.prefer_ai);
    respond(state.orchestrator.parse(&content, prefer_ai).await)
}

/// Parse with the rule-based segmenter only
async fn parse_newsletter_rules(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let (content, _) = match read_request(body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };
    respond(state.orchestrator.parse(&content, false).await)
}

/// Pull `content` (required non-empty string) and `preferAi` from the body
fn read_request(body: Result<Json<Value>, JsonRejection>) -> Result<(String, Option<bool>), Response> {
    let Json(value) = body.map_err(|e| {
        log::debug!("rejected parse request body: {}", e);
        bad_request("Content is required")
    })?;

    let content = value
        .get("content")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| bad_request("Content is required"))?;

    let prefer_ai = value.get("preferAi").and_then(Value::as_bool);
    Ok((content.to_string(), prefer_ai))
}

fn respond(outcome: ParseOutcome) -> Response {
    let fallback = outcome.fallback();
    Json(ParseResponse { outcome, fallback }).into_response()
}

fn bad_request(message: &str) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
        fallback: true,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Run the API server
pub async fn run_server(addr: &str, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let ai_enabled = state.orchestrator.has_ai();
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Carousel API running on {} (AI path {})", addr, if ai_enabled { "enabled" } else { "disabled" });
    log::info!("  POST /api/parse-newsletter       - Parse newsletter");
    log::info!("  POST /api/parse-newsletter/rules - Rule-based parse");
    log::info!("  GET  /api/slide-types            - Slide type catalog");
    log::info!("  GET  /health                     - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
