//! Mock generation backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jotter_inference::mock::MockGenerationBackend;
//! use jotter_core::{GenerationBackend, ProviderError};
//!
//! #[tokio::test]
//! async fn test_with_mock_backend() {
//!     let primary = MockGenerationBackend::new().failing(ProviderError::Timeout);
//!     let secondary = MockGenerationBackend::new().with_fixed_response("summary");
//!
//!     assert!(primary.generate("text").await.is_err());
//!     assert_eq!(secondary.generate("text").await.unwrap(), "summary");
//!     assert_eq!(primary.generate_call_count(), 1);
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use jotter_core::{GenerationBackend, ProviderError};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    name: String,
    model: String,
    behavior: MockBehavior,
    latency_ms: u64,
}

#[derive(Debug, Clone)]
enum MockBehavior {
    Respond(String),
    Fail(ProviderError),
    Panic,
}

/// A recorded `generate` call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub prompt: String,
    pub timestamp: std::time::Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            model: "mock-model".to_string(),
            behavior: MockBehavior::Respond("Mock summary".to_string()),
            latency_ms: 0,
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend that answers "Mock summary".
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the provider name reported to logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).name = name.into();
        self
    }

    /// Answer every request with `response`.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).behavior = MockBehavior::Respond(response.into());
        self
    }

    /// Fail every request with `error`.
    pub fn failing(mut self, error: ProviderError) -> Self {
        Arc::make_mut(&mut self.config).behavior = MockBehavior::Fail(error);
        self
    }

    /// Panic inside every request.
    pub fn panicking(mut self) -> Self {
        Arc::make_mut(&mut self.config).behavior = MockBehavior::Panic;
        self
    }

    /// Set simulated latency for every request.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Get number of generation calls.
    pub fn generate_call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    fn log_call(&self, prompt: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            prompt: prompt.to_string(),
            timestamp: std::time::Instant::now(),
        });
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.log_call(prompt);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        match &self.config.behavior {
            MockBehavior::Respond(text) => Ok(text.clone()),
            MockBehavior::Fail(err) => Err(err.clone()),
            MockBehavior::Panic => panic!("mock provider {} panicked", self.config.name),
        }
    }

    fn provider_name(&self) -> &str {
        &self.config.name
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_response() {
        let backend = MockGenerationBackend::new().with_fixed_response("hello");
        assert_eq!(backend.generate("prompt").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let backend = MockGenerationBackend::new().failing(ProviderError::RateLimited(
            "quota".to_string(),
        ));
        let err = backend.generate("prompt").await.unwrap_err();
        assert_eq!(err, ProviderError::RateLimited("quota".to_string()));
    }

    #[tokio::test]
    async fn test_call_logging_is_shared_across_clones() {
        let backend = MockGenerationBackend::new();
        let clone = backend.clone();

        backend.generate("first").await.unwrap();
        clone.generate("second").await.unwrap();

        assert_eq!(backend.generate_call_count(), 2);
        let calls = backend.get_calls();
        assert_eq!(calls[0].prompt, "first");
        assert_eq!(calls[1].prompt, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let backend = MockGenerationBackend::new().with_latency_ms(500);
        let start = tokio::time::Instant::now();
        backend.generate("prompt").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_names() {
        let backend = MockGenerationBackend::new().named("primary");
        assert_eq!(backend.provider_name(), "primary");
        assert_eq!(backend.model_name(), "mock-model");
    }
}
