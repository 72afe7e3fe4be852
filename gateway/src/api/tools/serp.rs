//! SERP tools: serp-analysis, serp-features and rank-tracking.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use futures_util::future::join_all;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_language, default_location, parse_input, run_tool};
use crate::error::Result;
use crate::provider::{self, DataForSeoClient};
use crate::AppState;

/// Marker used when a keyword has no match within the queried SERP depth.
const NOT_RANKING: &str = "Not in top 100";

#[derive(Debug, Deserialize)]
struct SerpRequest {
    keyword: String,
    #[serde(default = "default_location")]
    location: u64,
    #[serde(default = "default_language")]
    language: String,
}

/// POST /api/tools/serp-analysis
pub(super) async fn serp_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("serp-analysis", async move {
        let input: SerpRequest = parse_input(body)?;
        tracing::info!("Analyzing SERP for keyword: {}", input.keyword);

        let response = state
            .provider
            .post_tasks(
                "serp/google/organic/live/advanced",
                &json!([{
                    "keyword": &input.keyword,
                    "location_code": input.location,
                    "language_code": &input.language,
                    "device": "desktop",
                    "calculate_rectangles": true,
                }]),
            )
            .await?;

        let result = provider::first_result(&response);
        let organic_results: Vec<Value> = provider::result_items(&response)
            .iter()
            .filter(|item| item["type"] == "organic")
            .take(10)
            .map(|item| {
                json!({
                    "position": item["rank_group"],
                    "title": item["title"],
                    "url": item["url"],
                    "description": item["description"],
                    "domain": item["domain"],
                })
            })
            .collect();

        Ok(json!({
            "keyword": input.keyword,
            "location": input.location,
            "total_results": result["items_count"].as_u64().unwrap_or(0),
            "organic_results": organic_results,
        }))
    })
    .await
}

/// POST /api/tools/serp-features
pub(super) async fn serp_features(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("serp-features", async move {
        let input: SerpRequest = parse_input(body)?;
        tracing::info!("Extracting SERP features for keyword: {}", input.keyword);

        let response = state
            .provider
            .post_tasks(
                "serp/google/organic/live/advanced",
                &json!([{
                    "keyword": &input.keyword,
                    "location_code": input.location,
                    "language_code": &input.language,
                    "device": "desktop",
                    "people_also_ask_click_depth": 1,
                }]),
            )
            .await?;

        let items = provider::result_items(&response);
        Ok(extract_features(&input.keyword, &items))
    })
    .await
}

/// Pick the SERP feature payloads out of a mixed item list.
fn extract_features(keyword: &str, items: &[Value]) -> Value {
    let first_of = |kind: &str| {
        items
            .iter()
            .find(|item| item["type"] == kind)
            .cloned()
            .unwrap_or(Value::Null)
    };

    let paid_results: Vec<Value> = items
        .iter()
        .filter(|item| item["type"] == "paid")
        .cloned()
        .collect();

    let people_also_ask: Vec<Value> = items
        .iter()
        .find(|item| item["type"] == "people_also_ask")
        .and_then(|item| item["items"].as_array().cloned())
        .unwrap_or_default();

    let mut features: Vec<String> = Vec::new();
    for item in items {
        if let Some(kind) = item["type"].as_str() {
            if kind != "organic" && !features.iter().any(|f| f == kind) {
                features.push(kind.to_string());
            }
        }
    }

    json!({
        "keyword": keyword,
        "features": features,
        "featured_snippet": first_of("featured_snippet"),
        "knowledge_graph": first_of("knowledge_graph"),
        "paid_results": paid_results,
        "people_also_ask": people_also_ask,
    })
}

#[derive(Debug, Deserialize)]
struct RankTrackingRequest {
    domain: String,
    keywords: Vec<String>,
    #[serde(default = "default_location")]
    location: u64,
    #[serde(default = "default_language")]
    language: String,
}

struct RankHit {
    position: u64,
    url: Value,
    title: Value,
}

/// First item whose url or domain contains the target domain, with its
/// 1-based rank.
fn find_ranking(items: &[Value], domain: &str) -> Option<RankHit> {
    for (idx, item) in items.iter().enumerate() {
        let url_match = item["url"].as_str().is_some_and(|url| url.contains(domain));
        let domain_match = item["domain"].as_str().is_some_and(|d| d.contains(domain));
        if url_match || domain_match {
            return Some(RankHit {
                position: item["rank_group"].as_u64().unwrap_or(idx as u64 + 1),
                url: item["url"].clone(),
                title: item["title"].clone(),
            });
        }
    }
    None
}

async fn keyword_ranking(
    provider: &DataForSeoClient,
    domain: &str,
    keyword: &str,
    location: u64,
    language: &str,
) -> Result<Option<RankHit>> {
    let response = provider
        .post_tasks(
            "serp/google/organic/live/advanced",
            &json!([{
                "keyword": keyword,
                "location_code": location,
                "language_code": language,
                "device": "desktop",
                "depth": 100,
            }]),
        )
        .await?;

    Ok(find_ranking(&provider::result_items(&response), domain))
}

/// POST /api/tools/rank-tracking
pub(super) async fn rank_tracking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    run_tool("rank-tracking", async move {
        let input: RankTrackingRequest = parse_input(body)?;
        tracing::info!(
            "Tracking {} keywords for domain: {}",
            input.keywords.len(),
            input.domain
        );

        // One SERP lookup per keyword, issued concurrently. join_all keeps
        // the outcomes in input order regardless of completion order.
        let lookups = input.keywords.iter().map(|keyword| {
            keyword_ranking(
                &state.provider,
                &input.domain,
                keyword,
                input.location,
                &input.language,
            )
        });
        let outcomes = join_all(lookups).await;

        let mut rankings = Vec::with_capacity(input.keywords.len());
        let mut positions = Vec::new();
        for (keyword, outcome) in input.keywords.iter().zip(outcomes) {
            match outcome {
                Ok(Some(hit)) => {
                    positions.push(hit.position);
                    rankings.push(json!({
                        "keyword": keyword,
                        "position": hit.position,
                        "url": hit.url,
                        "title": hit.title,
                    }));
                }
                Ok(None) => {
                    rankings.push(json!({
                        "keyword": keyword,
                        "position": NOT_RANKING,
                        "url": null,
                        "title": null,
                    }));
                }
                // A single keyword's provider failure does not abort the
                // batch; it is reported on that keyword's row.
                Err(e) => {
                    tracing::warn!(keyword = %keyword, error = %e, "Rank lookup failed");
                    rankings.push(json!({
                        "keyword": keyword,
                        "position": NOT_RANKING,
                        "url": null,
                        "title": null,
                        "error": e.to_string(),
                    }));
                }
            }
        }

        let avg_position = if positions.is_empty() {
            0.0
        } else {
            positions.iter().sum::<u64>() as f64 / positions.len() as f64
        };

        Ok(json!({
            "domain": input.domain,
            "rankings": rankings,
            "summary": {
                "keywords_tracked": input.keywords.len(),
                "keywords_ranking": positions.len(),
                "avg_position": avg_position,
            },
        }))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serp_items() -> Vec<Value> {
        vec![
            json!({"type": "organic", "rank_group": 1, "url": "https://other.example/x", "domain": "other.example", "title": "Other"}),
            json!({"type": "organic", "rank_group": 2, "url": "https://another.example/y", "domain": "another.example", "title": "Another"}),
            json!({"type": "organic", "rank_group": 3, "url": "https://example.com/page", "domain": "example.com", "title": "Example"}),
        ]
    }

    #[test]
    fn test_find_ranking_matches_url_or_domain() {
        let hit = find_ranking(&serp_items(), "example.com").unwrap();
        assert_eq!(hit.position, 3);
        assert_eq!(hit.url, "https://example.com/page");
        assert_eq!(hit.title, "Example");

        assert!(find_ranking(&serp_items(), "missing.example").is_none());
    }

    #[test]
    fn test_find_ranking_falls_back_to_index() {
        let items = vec![
            json!({"url": "https://other.example/x"}),
            json!({"url": "https://example.com/y"}),
        ];
        let hit = find_ranking(&items, "example.com").unwrap();
        assert_eq!(hit.position, 2);
    }

    #[test]
    fn test_extract_features() {
        let items = vec![
            json!({"type": "featured_snippet", "title": "Snippet"}),
            json!({"type": "organic", "title": "Plain"}),
            json!({"type": "paid", "title": "Ad 1"}),
            json!({"type": "paid", "title": "Ad 2"}),
            json!({"type": "people_also_ask", "items": [{"title": "Q1"}, {"title": "Q2"}]}),
        ];

        let features = extract_features("rust", &items);
        assert_eq!(features["keyword"], "rust");
        assert_eq!(
            features["features"],
            json!(["featured_snippet", "paid", "people_also_ask"])
        );
        assert_eq!(features["featured_snippet"]["title"], "Snippet");
        assert_eq!(features["knowledge_graph"], Value::Null);
        assert_eq!(features["paid_results"].as_array().unwrap().len(), 2);
        assert_eq!(features["people_also_ask"].as_array().unwrap().len(), 2);
    }
}
