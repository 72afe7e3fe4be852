use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
    /// DataForSEO provider settings
    pub provider: ProviderConfig,
    /// Seconds between SSE heartbeat events (default: 30)
    pub heartbeat_interval_secs: u64,
}

/// DataForSEO API settings.
///
/// Credentials are optional so the process can start without them;
/// `/health` reports whether they are configured.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API base URL (default: https://api.dataforseo.com/v3)
    pub base_url: String,
    /// Basic auth login (DATAFORSEO_LOGIN)
    pub login: Option<String>,
    /// Basic auth password (DATAFORSEO_PASSWORD)
    pub password: Option<String>,
    /// Per-request timeout in seconds (default: 60)
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Both credentials present.
    pub fn is_configured(&self) -> bool {
        self.login.is_some() && self.password.is_some()
    }

    /// The credential pair, if both halves are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.login, &self.password) {
            (Some(login), Some(password)) => Some((login, password)),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            provider: ProviderConfig {
                base_url: env::var("DATAFORSEO_BASE_URL")
                    .unwrap_or_else(|_| "https://api.dataforseo.com/v3".to_string()),
                login: env::var("DATAFORSEO_LOGIN").ok(),
                password: env::var("DATAFORSEO_PASSWORD").ok(),
                timeout_secs: env::var("DATAFORSEO_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout)?,
            },
            heartbeat_interval_secs: env::var("SSE_HEARTBEAT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidHeartbeatInterval)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid DATAFORSEO_TIMEOUT_SECS value")]
    InvalidTimeout,
    #[error("Invalid SSE_HEARTBEAT_SECS value")]
    InvalidHeartbeatInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(login: Option<&str>, password: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            base_url: "https://api.dataforseo.com/v3".to_string(),
            login: login.map(str::to_string),
            password: password.map(str::to_string),
            timeout_secs: 60,
        }
    }

    #[test]
    fn test_credentials_require_both_halves() {
        assert!(provider(Some("user"), Some("secret")).is_configured());
        assert!(!provider(Some("user"), None).is_configured());
        assert!(!provider(None, Some("secret")).is_configured());
        assert!(!provider(None, None).is_configured());
        assert_eq!(
            provider(Some("user"), Some("secret")).credentials(),
            Some(("user", "secret"))
        );
        assert_eq!(provider(Some("user"), None).credentials(), None);
    }
}
