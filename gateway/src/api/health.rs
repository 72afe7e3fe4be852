//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use super::tools::TOOLS;
use crate::{AppState, SERVICE_NAME, VERSION};

/// GET /health - liveness and readiness descriptor.
///
/// Missing provider credentials are reported here rather than preventing
/// startup.
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": SERVICE_NAME,
        "version": VERSION,
        "sse_endpoint": "/sse",
        "mcp_info": "/mcp/info",
        "tools_available": TOOLS.len(),
        "dataforseo_configured": state.provider.is_configured(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}
