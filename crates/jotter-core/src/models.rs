//! Core data models for jotter.
//!
//! These types are shared across all jotter crates and represent the
//! domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A persisted note with its derived summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Derived from `content` on every create and update; never caller-supplied.
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Build a new, not yet persisted note with a fresh UUIDv7 and creation time.
    pub fn new(input: NoteInput, ai_summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            content: input.content,
            ai_summary: Some(ai_summary.into()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Caller-supplied body for creating or replacing a note.
///
/// Unknown fields (including `ai_summary`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteInput {
    /// At least 3 and at most 255 characters.
    #[schema(min_length = 3, max_length = 255, example = "Groceries")]
    pub title: String,
    /// At least 10 characters.
    #[schema(min_length = 10, example = "Buy milk eggs and bread for the week")]
    pub content: String,
}

impl NoteInput {
    /// Check field lengths, collecting one violation per failing field.
    pub fn validate(&self) -> std::result::Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let title_len = self.title.chars().count();
        if title_len < defaults::TITLE_MIN_CHARS {
            violations.push(FieldViolation::too_short(
                "title",
                defaults::TITLE_MIN_CHARS,
            ));
        } else if title_len > defaults::TITLE_MAX_CHARS {
            violations.push(FieldViolation::too_long("title", defaults::TITLE_MAX_CHARS));
        }

        if self.content.chars().count() < defaults::CONTENT_MIN_CHARS {
            violations.push(FieldViolation::too_short(
                "content",
                defaults::CONTENT_MIN_CHARS,
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Replacement values for an existing note.
#[derive(Debug, Clone)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
    pub ai_summary: String,
    /// Requested modification time; stores clamp it to be after `created_at`.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
    /// Machine-readable constraint name, e.g. `string_too_short`.
    pub kind: String,
}

impl FieldViolation {
    pub fn too_short(field: &str, min: usize) -> Self {
        let unit = if min == 1 { "character" } else { "characters" };
        Self {
            field: field.to_string(),
            message: format!("String should have at least {} {}", min, unit),
            kind: "string_too_short".to_string(),
        }
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self {
            field: field.to_string(),
            message: format!("String should have at most {} characters", max),
            kind: "string_too_long".to_string(),
        }
    }
}
