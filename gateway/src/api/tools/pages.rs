//! Page tools: content-analysis and tech-seo-audit.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_input, run_tool};
use crate::provider;
use crate::AppState;

/// Lighthouse audits requested for the technical audit.
const LIGHTHOUSE_AUDITS: [&str; 5] = [
    "first-contentful-paint",
    "largest-contentful-paint",
    "cumulative-layout-shift",
    "total-blocking-time",
    "speed-index",
];

#[derive(Debug, Deserialize)]
struct PageRequest {
    url: String,
}

/// POST /api/tools/content-analysis
pub(super) async fn content_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("content-analysis", async move {
        let input: PageRequest = parse_input(body)?;
        tracing::info!("Parsing content of: {}", input.url);

        let response = state
            .provider
            .post_tasks(
                "on_page/content_parsing/live",
                &json!([{
                    "url": &input.url,
                    "enable_javascript": true,
                    "load_resources": true,
                }]),
            )
            .await?;

        Ok(json!({
            "url": input.url,
            "content": provider::first_result(&response),
        }))
    })
    .await
}

/// POST /api/tools/tech-seo-audit
pub(super) async fn tech_seo_audit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("tech-seo-audit", async move {
        let input: PageRequest = parse_input(body)?;
        tracing::info!("Running technical audit on: {}", input.url);

        let response = state
            .provider
            .post_tasks(
                "on_page/lighthouse/live/json",
                &json!([{
                    "url": &input.url,
                    "categories": ["performance", "accessibility", "best_practices", "seo"],
                    "audits": LIGHTHOUSE_AUDITS,
                }]),
            )
            .await?;

        Ok(json!({
            "url": input.url,
            "audit": provider::first_result(&response),
        }))
    })
    .await
}
