//! # jotter-inference
//!
//! Summarization for jotter.
//!
//! This crate provides:
//! - An OpenAI-compatible backend (primary provider)
//! - A Google Gemini backend (secondary provider)
//! - [`Summarizer`], an ordered fallback chain over any [`GenerationBackend`]s
//! - A mock backend for deterministic testing (`mock` feature)
//!
//! ## Feature Flags
//!
//! - `openai` (default): OpenAI-compatible backend
//! - `gemini` (default): Gemini backend
//! - `mock`: `MockGenerationBackend` for tests in dependent crates
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jotter_inference::{GeminiBackend, GeminiConfig, OpenAIBackend, OpenAIConfig, Summarizer};
//!
//! let primary = Arc::new(OpenAIBackend::new(OpenAIConfig::default())?);
//! let secondary = Arc::new(GeminiBackend::new(GeminiConfig::default())?);
//! let summarizer = Summarizer::new(vec![primary, secondary], 1000);
//!
//! let summary = summarizer.generate_summary("Buy milk eggs and bread").await;
//! ```

pub mod error;
pub mod summarizer;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core traits
pub use jotter_core::{GenerationBackend, ProviderError};

pub use summarizer::{Summarizer, ALL_FALLBACKS_FAILED, TOKEN_LIMIT_EXCEEDED, UNEXPECTED_ERROR};

#[cfg(feature = "openai")]
pub use openai::{OpenAIBackend, OpenAIConfig};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiBackend, GeminiConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerationBackend;
