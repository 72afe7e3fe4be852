//! Tool pipelines: one POST endpoint per SEO tool.
//!
//! Every pipeline has the same shape: parse the input (applying defaults),
//! build a task array for the provider, issue the call, extract a subset of
//! the response, and wrap the outcome in the uniform envelope via
//! [`run_tool`].

pub mod domains;
pub mod keywords;
pub mod pages;
pub mod serp;

use std::future::Future;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::AppState;

/// Static descriptor for one tool, shared by `/mcp/info` and `/health`.
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
    pub parameters: &'static [&'static str],
}

pub const TOOLS: [ToolDescriptor; 10] = [
    ToolDescriptor {
        name: "serp-analysis",
        description: "Analyze SERP results for a keyword",
        endpoint: "/api/tools/serp-analysis",
        parameters: &["keyword", "location", "language"],
    },
    ToolDescriptor {
        name: "keywords-research",
        description: "Research keywords and get search volume",
        endpoint: "/api/tools/keywords-research",
        parameters: &["keywords", "location", "language"],
    },
    ToolDescriptor {
        name: "domain-analysis",
        description: "Analyze domain performance",
        endpoint: "/api/tools/domain-analysis",
        parameters: &["domain"],
    },
    ToolDescriptor {
        name: "backlinks-analysis",
        description: "Get backlink summary for a domain",
        endpoint: "/api/tools/backlinks-analysis",
        parameters: &["domain", "limit"],
    },
    ToolDescriptor {
        name: "competitor-research",
        description: "Find competing domains",
        endpoint: "/api/tools/competitor-research",
        parameters: &["domain", "location", "language", "limit"],
    },
    ToolDescriptor {
        name: "keyword-ideas",
        description: "Get keyword ideas for a seed keyword",
        endpoint: "/api/tools/keyword-ideas",
        parameters: &["seed_keyword", "location", "language", "limit"],
    },
    ToolDescriptor {
        name: "serp-features",
        description: "Extract SERP features for a keyword",
        endpoint: "/api/tools/serp-features",
        parameters: &["keyword", "location", "language"],
    },
    ToolDescriptor {
        name: "rank-tracking",
        description: "Track domain rankings for a set of keywords",
        endpoint: "/api/tools/rank-tracking",
        parameters: &["domain", "keywords", "location", "language"],
    },
    ToolDescriptor {
        name: "content-analysis",
        description: "Parse and analyze page content",
        endpoint: "/api/tools/content-analysis",
        parameters: &["url"],
    },
    ToolDescriptor {
        name: "tech-seo-audit",
        description: "Run a technical SEO audit on a URL",
        endpoint: "/api/tools/tech-seo-audit",
        parameters: &["url"],
    },
];

/// Run one tool body, converting any failure into an error envelope.
///
/// This is the pipeline boundary: no error below it escapes uncaught.
pub(crate) async fn run_tool<F>(tool: &'static str, body: F) -> Response
where
    F: Future<Output = Result<Value>>,
{
    let envelope = match body.await {
        Ok(data) => Envelope::success(tool, data),
        Err(e) => {
            tracing::error!(tool, error = %e, "Tool invocation failed");
            Envelope::failure(tool, e.to_string())
        }
    };
    envelope.into_response()
}

/// Deserialize a tool input inside the pipeline, so missing or malformed
/// fields surface as error envelopes rather than extractor rejections.
pub(crate) fn parse_input<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| Error::InvalidRequest(e.to_string()))
}

// Input defaults shared across tools.
pub(crate) fn default_location() -> u64 {
    2826
}
pub(crate) fn default_language() -> String {
    "he".to_string()
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/serp-analysis", post(serp::serp_analysis))
        .route("/serp-features", post(serp::serp_features))
        .route("/rank-tracking", post(serp::rank_tracking))
        .route("/keywords-research", post(keywords::keywords_research))
        .route("/keyword-ideas", post(keywords::keyword_ideas))
        .route("/domain-analysis", post(domains::domain_analysis))
        .route("/backlinks-analysis", post(domains::backlinks_analysis))
        .route("/competitor-research", post(domains::competitor_research))
        .route("/content-analysis", post(pages::content_analysis))
        .route("/tech-seo-audit", post(pages::tech_seo_audit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_table_matches_router_paths() {
        for tool in &TOOLS {
            assert_eq!(
                tool.endpoint,
                format!("/api/tools/{}", tool.name),
                "endpoint out of sync for {}",
                tool.name
            );
        }
    }
}
