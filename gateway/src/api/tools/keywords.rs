//! Keyword tools: keywords-research and keyword-ideas.

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
struct KeywordsResearchRequest {
    keywords: Vec<String>,
    #[serde(default = "default_location")]
    location: u64,
    #[serde(default = "default_language")]
    language: String,
}

/// POST /api/tools/keywords-research
pub(super) async fn keywords_research(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("keywords-research", async move {
        let input: KeywordsResearchRequest = parse_input(body)?;
        tracing::info!("Researching keywords: {}", input.keywords.join(", "));

        // One task per keyword, batched in a single call.
        let tasks: Vec<Value> = input
            .keywords
            .iter()
            .map(|keyword| {
                json!({
                    "keyword": keyword,
                    "location_code": input.location,
                    "language_code": &input.language,
                })
            })
            .collect();

        let response = state
            .provider
            .post_tasks(
                "keywords_data/google_ads/search_volume/live",
                &Value::Array(tasks),
            )
            .await?;

        let keywords_data: Vec<Value> = provider::result_list(&response)
            .iter()
            .map(|result| {
                json!({
                    "keyword": result["keyword"],
                    "search_volume": result["search_volume"].as_u64().unwrap_or(0),
                    "competition": result["competition"],
                    "cpc": result["cpc"],
                })
            })
            .collect();

        Ok(json!({ "keywords_data": keywords_data }))
    })
    .await
}

fn default_ideas_limit() -> u64 {
    100
}

#[derive(Debug, Deserialize)]
struct KeywordIdeasRequest {
    seed_keyword: String,
    #[serde(default = "default_location")]
    location: u64,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default = "default_ideas_limit")]
    limit: u64,
}

/// POST /api/tools/keyword-ideas
pub(super) async fn keyword_ideas(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("keyword-ideas", async move {
        let input: KeywordIdeasRequest = parse_input(body)?;
        tracing::info!("Generating keyword ideas for: {}", input.seed_keyword);

        let response = state
            .provider
            .post_tasks(
                "dataforseo_labs/google/keyword_ideas/live",
                &json!([{
                    "keywords": [&input.seed_keyword],
                    "location_code": input.location,
                    "language_code": &input.language,
                    "limit": input.limit,
                }]),
            )
            .await?;

        Ok(json!({
            "seed_keyword": input.seed_keyword,
            "ideas": provider::result_items(&response),
        }))
    })
    .await
}
