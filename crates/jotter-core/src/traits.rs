//! Core traits for jotter abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{ProviderError, Result};
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Persist a new note and return the stored row.
    async fn insert(&self, note: Note) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes, oldest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Replace title, content and summary of an existing note.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check if a note exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}

// =============================================================================
// GENERATION TRAITS
// =============================================================================

/// A single text-generation provider used for summaries.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for a single-turn user prompt.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError>;

    /// Provider identifier used in logs (e.g. "openai", "gemini").
    fn provider_name(&self) -> &str;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
