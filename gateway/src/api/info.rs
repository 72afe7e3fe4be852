//! MCP capability descriptor.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::tools::TOOLS;
use crate::{SERVER_NAME, VERSION};

/// GET /mcp/info - static capability descriptor.
async fn mcp_info() -> Json<Value> {
    let tools: Vec<Value> = TOOLS
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "endpoint": tool.endpoint,
                "parameters": tool.parameters,
            })
        })
        .collect();

    Json(json!({
        "name": SERVER_NAME,
        "version": VERSION,
        "description": "DataForSEO MCP server with SSE support",
        "tools": tools,
        "sse_endpoint": "/sse",
        "capabilities": [
            "Real-time progress updates",
            "SERP analysis",
            "Keywords research",
            "Domain analysis",
            "Backlinks analysis",
            "Competitor research",
            "Keyword ideas",
            "SERP features",
            "Rank tracking",
            "Content analysis",
            "Technical SEO audits",
        ],
    }))
}

pub fn router() -> Router {
    Router::new().route("/mcp/info", get(mcp_info))
}
