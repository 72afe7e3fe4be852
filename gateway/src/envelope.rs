//! Uniform response envelope shared by all tool pipelines.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Result of one tool invocation.
///
/// Success or failure, every envelope serializes with the same four top-level
/// fields (`type`, `tool`, `success`, `timestamp`) so consumers can dispatch
/// on `type`/`tool` without per-tool logic. Only the payload field differs:
/// `data` on success, `error` on failure.
pub enum Envelope {
    Success {
        tool: &'static str,
        data: Value,
        at: DateTime<Utc>,
    },
    Failure {
        tool: &'static str,
        error: String,
        at: DateTime<Utc>,
    },
}

impl Envelope {
    pub fn success(tool: &'static str, data: Value) -> Self {
        Envelope::Success {
            tool,
            data,
            at: Utc::now(),
        }
    }

    pub fn failure(tool: &'static str, error: impl Into<String>) -> Self {
        Envelope::Failure {
            tool,
            error: error.into(),
            at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Envelope::Success { tool, data, at } => json!({
                "type": "result",
                "tool": tool,
                "success": true,
                "data": data,
                "timestamp": at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }),
            Envelope::Failure { tool, error, at } => json!({
                "type": "error",
                "tool": tool,
                "success": false,
                "error": error,
                "timestamp": at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = match self {
            Envelope::Success { .. } => StatusCode::OK,
            Envelope::Failure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = Envelope::success("serp-analysis", json!({"keyword": "rust"})).to_json();
        assert_eq!(body["type"], "result");
        assert_eq!(body["tool"], "serp-analysis");
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["keyword"], "rust");
        assert!(body["timestamp"].is_string());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let body = Envelope::failure("rank-tracking", "connection refused").to_json();
        assert_eq!(body["type"], "error");
        assert_eq!(body["tool"], "rank-tracking");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "connection refused");
        assert!(body["timestamp"].is_string());
        assert!(body.get("data").is_none());
    }
}
