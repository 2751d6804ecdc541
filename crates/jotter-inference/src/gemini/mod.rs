//! Google Gemini generation backend (`generateContent` REST API).

mod backend;
mod types;

pub use backend::{GeminiBackend, GeminiConfig, PROVIDER_NAME};
pub use types::*;
