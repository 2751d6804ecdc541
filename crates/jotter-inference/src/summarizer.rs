//! Summary generation over an ordered chain of providers.
//!
//! Providers are tried in order with a single attempt each; the first
//! non-empty answer wins. Failures never escape: the caller always gets a
//! string, either a real summary or one of the sentinels below.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use jotter_core::{GenerationBackend, ProviderError};

/// Returned when the input has more words than the configured limit.
pub const TOKEN_LIMIT_EXCEEDED: &str = "Summary API Token limit exceeded";

/// Returned when every provider in the chain failed.
pub const ALL_FALLBACKS_FAILED: &str = "Summary unavailable (all fallbacks failed)";

/// Returned when summary generation panicked.
pub const UNEXPECTED_ERROR: &str = "Summary unavailable (unexpected error)";

/// Produces a summary for note content, degrading to a sentinel on failure.
#[derive(Clone)]
pub struct Summarizer {
    providers: Vec<Arc<dyn GenerationBackend>>,
    max_words: usize,
}

impl Summarizer {
    /// Build a summarizer over `providers`, tried in the given order.
    pub fn new(providers: Vec<Arc<dyn GenerationBackend>>, max_words: usize) -> Self {
        info!(
            subsystem = "inference",
            component = "summarizer",
            chain = %providers
                .iter()
                .map(|p| p.provider_name())
                .collect::<Vec<_>>()
                .join(" -> "),
            max_words,
            "Summarizer configured"
        );
        Self {
            providers,
            max_words,
        }
    }

    /// Word limit applied to input content.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Number of providers in the chain.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Summarize `content`. Never fails.
    pub async fn generate_summary(&self, content: &str) -> String {
        match AssertUnwindSafe(self.run_chain(content)).catch_unwind().await {
            Ok(summary) => summary,
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(
                    subsystem = "inference",
                    component = "summarizer",
                    error = %message,
                    "Unexpected error in summary generation"
                );
                UNEXPECTED_ERROR.to_string()
            }
        }
    }

    async fn run_chain(&self, content: &str) -> String {
        let word_count = content.split_whitespace().count();
        if word_count > self.max_words {
            warn!(
                subsystem = "inference",
                component = "summarizer",
                limit = self.max_words,
                word_count,
                "Summary input exceeds word limit"
            );
            return TOKEN_LIMIT_EXCEEDED.to_string();
        }

        for (position, provider) in self.providers.iter().enumerate() {
            let start = Instant::now();
            match provider.generate(content).await {
                Ok(summary) => {
                    debug!(
                        subsystem = "inference",
                        component = "summarizer",
                        provider = provider.provider_name(),
                        model = provider.model_name(),
                        position,
                        word_count,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Summary generated"
                    );
                    return summary;
                }
                Err(err) => self.log_failure(provider.as_ref(), position, &err),
            }
        }

        ALL_FALLBACKS_FAILED.to_string()
    }

    fn log_failure(&self, provider: &dyn GenerationBackend, position: usize, err: &ProviderError) {
        let next = self.providers.get(position + 1).map(|p| p.provider_name());
        warn!(
            subsystem = "inference",
            component = "summarizer",
            provider = provider.provider_name(),
            model = provider.model_name(),
            error_kind = err.kind(),
            error = %err,
            fallback = next.unwrap_or("none"),
            "Summary provider failed"
        );
    }
}
