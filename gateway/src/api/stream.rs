//! SSE notification stream.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::sse::{Event, Sse};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::{SecondsFormat, Utc};
use futures_util::stream::{self, Stream, StreamExt};
use serde_json::{json, Value};
use tokio_stream::wrappers::IntervalStream;

use crate::AppState;

/// Server name sent in the SSE handshake, distinct from the `/mcp/info` name.
const SSE_SERVER_NAME: &str = "dataforseo-mcp-sse";

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One connection event followed by a heartbeat every `period`.
///
/// The interval timer is owned by the returned stream: when the peer
/// disconnects axum drops the response body, which drops the stream and
/// cancels the timer. No write can happen on a closed connection and no
/// timer outlives its session.
pub(crate) fn session_events(period: Duration) -> impl Stream<Item = Value> {
    let hello = json!({
        "type": "connection",
        "message": "Connected to DataForSEO MCP Server",
        "server": SSE_SERVER_NAME,
        "timestamp": now(),
    });

    let first_beat = tokio::time::Instant::now() + period;
    let heartbeats = IntervalStream::new(tokio::time::interval_at(first_beat, period))
        .map(|_| json!({ "type": "heartbeat", "timestamp": now() }));

    stream::once(async move { hello }).chain(heartbeats)
}

/// GET /sse - persistent one-way notification stream.
async fn sse(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("SSE client connected");

    let period = Duration::from_secs(state.config.heartbeat_interval_secs);
    let events = session_events(period)
        .map(|payload| Ok::<_, Infallible>(Event::default().data(payload.to_string())));

    ([(header::CACHE_CONTROL, "no-cache")], Sse::new(events))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/sse", get(sse)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[tokio::test(start_paused = true)]
    async fn test_connection_event_then_periodic_heartbeats() {
        let mut events = Box::pin(session_events(Duration::from_secs(30)));

        // Handshake arrives immediately.
        let hello = events.next().await.unwrap();
        assert_eq!(hello["type"], "connection");
        assert_eq!(hello["server"], "dataforseo-mcp-sse");
        assert!(hello["timestamp"].is_string());

        // Nothing more until the interval elapses.
        assert!(events.next().now_or_never().is_none());

        tokio::time::advance(Duration::from_secs(30)).await;
        let beat = events.next().await.unwrap();
        assert_eq!(beat["type"], "heartbeat");
        assert!(beat["timestamp"].is_string());

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(events.next().await.unwrap()["type"], "heartbeat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_heartbeat_before_interval() {
        let mut events = Box::pin(session_events(Duration::from_secs(30)));
        let _ = events.next().await;

        tokio::time::advance(Duration::from_secs(29)).await;
        assert!(events.next().now_or_never().is_none());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(events.next().await.unwrap()["type"], "heartbeat");
    }
}
