//! OpenAI-compatible generation backend.
//!
//! Works with the OpenAI cloud API and any endpoint that speaks the
//! `/chat/completions` protocol (vLLM, LM Studio, Ollama in compatibility mode).
//!
//! # Example
//!
//! ```rust,no_run
//! use jotter_inference::openai::{OpenAIBackend, OpenAIConfig};
//! use jotter_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenAIConfig {
//!         api_key: std::env::var("OPENAI_API_KEY").ok(),
//!         ..Default::default()
//!     };
//!     let backend = OpenAIBackend::new(config).unwrap();
//!     let text = backend.generate("Summarize: the quick brown fox").await;
//!     println!("{:?}", text);
//! }
//! ```

mod backend;
mod types;

pub use backend::{OpenAIBackend, OpenAIConfig, PROVIDER_NAME};
pub use types::*;
