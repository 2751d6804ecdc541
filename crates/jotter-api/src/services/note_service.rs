//! Note orchestration: validated input, summary, persisted entity.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use jotter_core::{Error, Note, NoteInput, NoteRepository, Result, UpdateNoteRequest};
use jotter_inference::Summarizer;

/// Coordinates the note store and the summarizer.
///
/// Input is assumed to be validated already; this layer only sequences the
/// summary call and the persistence call.
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
    summarizer: Summarizer,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>, summarizer: Summarizer) -> Self {
        Self { repo, summarizer }
    }

    /// Summarize and persist a new note.
    pub async fn create(&self, input: NoteInput) -> Result<Note> {
        let start = Instant::now();
        let summary = self.summarizer.generate_summary(&input.content).await;
        let note = self.repo.insert(Note::new(input, summary)).await?;

        info!(
            subsystem = "api",
            component = "note_service",
            op = "create",
            note_id = %note.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Note created"
        );
        Ok(note)
    }

    /// Replace title and content of an existing note and regenerate its summary.
    ///
    /// Existence is checked before any provider call.
    pub async fn update(&self, id: Uuid, input: NoteInput) -> Result<Note> {
        if !self.repo.exists(id).await? {
            return Err(Error::NoteNotFound(id));
        }

        let start = Instant::now();
        let summary = self.summarizer.generate_summary(&input.content).await;
        let note = self
            .repo
            .update(
                id,
                UpdateNoteRequest {
                    title: input.title,
                    content: input.content,
                    ai_summary: summary,
                    updated_at: Utc::now(),
                },
            )
            .await?;

        info!(
            subsystem = "api",
            component = "note_service",
            op = "update",
            note_id = %id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Note updated"
        );
        Ok(note)
    }

    /// Permanently remove a note.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        info!(
            subsystem = "api",
            component = "note_service",
            op = "delete",
            note_id = %id,
            "Note deleted"
        );
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Note> {
        self.repo.fetch(id).await
    }

    pub async fn list(&self) -> Result<Vec<Note>> {
        let notes = self.repo.list().await?;
        debug!(
            subsystem = "api",
            component = "note_service",
            op = "list",
            count = notes.len(),
            "Notes listed"
        );
        Ok(notes)
    }

    /// Probe the note store.
    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }
}
