//! Mapping of HTTP-level provider failures onto `ProviderError`.

use jotter_core::ProviderError;

/// Classify a non-success HTTP status from a provider.
pub fn from_status(status: u16, message: impl Into<String>) -> ProviderError {
    let message = message.into();
    match status {
        401 | 403 => ProviderError::Authentication(message),
        408 | 504 => ProviderError::Timeout,
        429 => ProviderError::RateLimited(message),
        _ => ProviderError::Upstream { status, message },
    }
}

/// Classify a reqwest failure that happened before a status was available.
pub fn from_reqwest(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_decode() {
        ProviderError::Malformed(err.to_string())
    } else {
        ProviderError::Transport(err.to_string())
    }
}
