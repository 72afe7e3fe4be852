pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod provider;

pub use config::{Config, ConfigError, ProviderConfig};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use provider::DataForSeoClient;

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "DataForSEO MCP Gateway";
/// Server name reported by `/mcp/info`.
pub const SERVER_NAME: &str = "dataforseo-mcp-server";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub provider: DataForSeoClient,
}

impl AppState {
    pub fn new(config: Config, provider: DataForSeoClient) -> Self {
        Self { config, provider }
    }
}
