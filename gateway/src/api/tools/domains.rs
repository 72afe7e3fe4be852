//! Domain tools: domain-analysis, backlinks-analysis and competitor-research.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_language, default_location, parse_input, run_tool};
use crate::provider;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct DomainRequest {
    domain: String,
}

/// POST /api/tools/domain-analysis
pub(super) async fn domain_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("domain-analysis", async move {
        let input: DomainRequest = parse_input(body)?;
        tracing::info!("Analyzing domain: {}", input.domain);

        let response = state
            .provider
            .post_tasks(
                "domain_analytics/google/overview/live",
                &json!([{
                    "target": &input.domain,
                    "location_code": default_location(),
                    "language_code": default_language(),
                }]),
            )
            .await?;

        Ok(json!({
            "domain": input.domain,
            "analysis": provider::first_result(&response),
        }))
    })
    .await
}

fn default_backlinks_limit() -> u64 {
    100
}

#[derive(Debug, Deserialize)]
struct BacklinksRequest {
    domain: String,
    #[serde(default = "default_backlinks_limit")]
    limit: u64,
}

/// POST /api/tools/backlinks-analysis
pub(super) async fn backlinks_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("backlinks-analysis", async move {
        let input: BacklinksRequest = parse_input(body)?;
        tracing::info!("Fetching backlink summary for: {}", input.domain);

        let response = state
            .provider
            .post_tasks(
                "backlinks/summary/live",
                &json!([{
                    "target": &input.domain,
                    "include_subdomains": true,
                    "limit": input.limit,
                }]),
            )
            .await?;

        Ok(json!({
            "domain": input.domain,
            "summary": provider::first_result(&response),
        }))
    })
    .await
}

fn default_competitors_limit() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
struct CompetitorsRequest {
    domain: String,
    #[serde(default = "default_location")]
    location: u64,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default = "default_competitors_limit")]
    limit: u64,
}

/// POST /api/tools/competitor-research
pub(super) async fn competitor_research(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("competitor-research", async move {
        let input: CompetitorsRequest = parse_input(body)?;
        tracing::info!("Finding competitors for: {}", input.domain);

        let response = state
            .provider
            .post_tasks(
                "dataforseo_labs/google/competitors_domain/live",
                &json!([{
                    "target": &input.domain,
                    "location_code": input.location,
                    "language_code": &input.language,
                    "limit": input.limit,
                }]),
            )
            .await?;

        Ok(json!({
            "domain": input.domain,
            "competitors": provider::result_items(&response),
        }))
    })
    .await
}
