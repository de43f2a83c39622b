//! HTTP surface: the chat endpoint and a health probe.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse, HealthResponse};
use crate::rate_limiter::RateLimiter;
use crate::service::AgriAssistant;

const CLIENT_ID_HEADER: &str = "x-client-id";
const ANONYMOUS_CLIENT: &str = "anonymous";

/// Application state shared across handlers.
pub struct AppState {
    pub assistant: AgriAssistant,
    pub limiter: Mutex<RateLimiter>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(assistant: AgriAssistant, limiter: RateLimiter) -> Self {
        Self {
            assistant,
            limiter: Mutex::new(limiter),
            started_at: Instant::now(),
        }
    }
}

/// Build the router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let client = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(ANONYMOUS_CLIENT);

    {
        let mut limiter = state.limiter.lock().expect("limiter lock poisoned");
        if !limiter.allow(client) {
            return Err((
                StatusCode::TOO_MANY_REQUESTS,
                "rate limit exceeded".to_string(),
            ));
        }
    }

    request
        .validate()
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let request_id = Uuid::new_v4();
    info!(%request_id, client, query_len = request.query.len(), "chat request");

    let response = state.assistant.handle(&request).await;
    debug!(%request_id, source = %response.source, "chat response ready");

    Ok(Json(response))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
