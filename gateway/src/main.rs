//! DataForSEO MCP Gateway - SEO tool endpoints with an SSE progress stream.

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dataforseo_gateway::{api, AppState, Config, DataForSeoClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let provider = DataForSeoClient::new(&config.provider)?;

    if !provider.is_configured() {
        tracing::warn!(
            "DATAFORSEO_LOGIN / DATAFORSEO_PASSWORD not set, provider calls will be rejected upstream"
        );
    }

    let state = Arc::new(AppState::new(config.clone(), provider));

    // Build router
    let app = api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("DataForSEO MCP gateway listening on {}", addr);
    tracing::info!("SSE endpoint: /sse, MCP info: /mcp/info, health: /health");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
