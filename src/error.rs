use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the WAHA client.
///
/// Every API call resolves to either a decoded payload or exactly one of
/// these variants; callers never see a raw HTTP response. The first five
/// variants are produced by the transport's status classification, the
/// rest by local concerns (construction, file access, body building).
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the API key (HTTP 401).
    #[error("Authentication failed. Please check your API key.")]
    Authentication,

    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// Too many requests (HTTP 429).
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimit,

    /// The server failed to process the request (HTTP 5xx).
    #[error("{message} (Status: {status})")]
    Server { status: u16, message: String },

    /// Any other HTTP error status not covered above.
    #[error("{message} (Status: {status})")]
    Api { status: u16, message: String },

    /// Transport-level failure: connection refused, DNS, TLS or timeout.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client construction failed before any request was made.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local file access failed while preparing a media body.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body construction failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A binary response arrived where JSON was expected.
    #[error("Unexpected response payload: {0}")]
    UnexpectedPayload(&'static str),
}

impl Error {
    /// HTTP status behind a status-derived error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication => Some(401),
            Error::NotFound => Some(404),
            Error::RateLimit => Some(429),
            Error::Server { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was produced by HTTP status classification, as
    /// opposed to a local or transport failure.
    pub fn is_status_error(&self) -> bool {
        self.status().is_some()
    }
}
