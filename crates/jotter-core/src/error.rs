//! Error types for jotter.

use thiserror::Error;

/// Result type alias using jotter's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jotter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the error means the requested note does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NoteNotFound(_))
    }
}

/// Typed failure from a single summarization provider attempt.
///
/// Every variant is recoverable from the caller's point of view: the
/// summarizer moves on to the next provider in its chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider is missing credentials or an endpoint.
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The provider rejected the request because of quota or rate limits.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Credentials were rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Any other non-success HTTP status.
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Connection-level failure (DNS, TLS, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The provider answered but produced no text.
    #[error("empty response")]
    EmptyResponse,
}

impl ProviderError {
    /// Short stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured(_) => "not_configured",
            Self::Timeout => "timeout",
            Self::RateLimited(_) => "rate_limited",
            Self::Authentication(_) => "authentication",
            Self::Upstream { .. } => "upstream",
            Self::Transport(_) => "transport",
            Self::Malformed(_) => "malformed",
            Self::EmptyResponse => "empty_response",
        }
    }
}
