use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use interviewer_core::{SessionRequest, open_session};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Query string accepted by `GET /session`. Both fields are free text.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionQuery {
    pub event: Option<String>,
    pub vibe: Option<String>,
}

impl SessionQuery {
    /// Collects `event` and `vibe` from raw query pairs. A repeated key keeps
    /// every value, joined by commas; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "event" => &mut query.event,
                "vibe" => &mut query.vibe,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        query
    }
}

/// Builds the application router with all routes and layers.
pub fn create_router(state: AppState) -> Router {
    // Configure a permissive CORS policy so a browser page on any origin can
    // request sessions.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/session", get(create_session))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "✅ Life Interviewer server is running. Try /health or /session"
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Creates an upstream realtime session for the requested event and vibe and
/// relays the upstream JSON untouched.
///
/// The query is read as plain pairs so that no query string can be rejected
/// before the request reaches the sanitizer.
pub async fn create_session(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let query = SessionQuery::from_pairs(pairs);
    let request = SessionRequest::new(query.event.as_deref(), query.vibe.as_deref());
    let session = open_session(state.sessions.as_ref(), &state.preset, &request).await?;
    Ok(Json(session))
}
