//! Gemini backend against a mock HTTP server.

use std::time::Duration;

use jotter_inference::{GeminiBackend, GeminiConfig, GenerationBackend, ProviderError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn backend_for(server: &MockServer, api_key: Option<&str>) -> GeminiBackend {
    GeminiBackend::new(GeminiConfig {
        base_url: format!("{}/v1beta", server.uri()),
        api_key: api_key.map(str::to_string),
        gen_model: "gemini-2.0-flash".to_string(),
        max_tokens: 1000,
        timeout_seconds: 1,
    })
    .unwrap()
}

#[tokio::test]
async fn test_generate_sends_key_header_and_contents() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "gemini-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Buy milk eggs and bread"}]}],
            "generationConfig": {"maxOutputTokens": 1000}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "A shopping "}, {"text": "list."}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = backend_for(&server, Some("gemini-key"))
        .generate("Buy milk eggs and bread")
        .await
        .unwrap();

    assert_eq!(summary, "A shopping list.");
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = backend_for(&server, None).generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured(_)));
}

#[tokio::test]
async fn test_resource_exhausted_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server, Some("gemini-key"))
        .generate("hello")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::RateLimited("Resource has been exhausted (e.g. check quota).".to_string())
    );
}

#[tokio::test]
async fn test_invalid_key_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server, Some("bad"))
        .generate("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Authentication(_)));
}

#[tokio::test]
async fn test_blocked_prompt_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server, Some("gemini-key"))
        .generate("hello")
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::EmptyResponse);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let err = backend_for(&server, Some("gemini-key"))
        .generate("hello")
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::Timeout);
}
