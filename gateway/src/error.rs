//! Error types for the gateway.

/// Error types for tool pipeline operations.
///
/// Every variant is caught at the pipeline boundary and converted into an
/// error envelope; none of these reach the caller as an unhandled fault.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("Provider returned {status}: {body}")]
    ProviderStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
