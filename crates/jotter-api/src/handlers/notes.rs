//! Note CRUD HTTP handlers.

use axum::{extract::State, http::StatusCode, Json};

use jotter_core::{Note, NoteInput};

use crate::error::{MessageBody, ValidationErrorBody};
use crate::extract::{NoteId, ValidatedJson};
use crate::{ApiError, AppState};

/// List all notes, oldest first.
#[utoipa::path(get, path = "/notes", tag = "Notes",
    responses((status = 200, description = "All notes", body = [Note])))]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.notes.list().await?))
}

/// Create a note. The summary is generated before the response is sent.
#[utoipa::path(post, path = "/notes", tag = "Notes",
    request_body = NoteInput,
    responses(
        (status = 201, description = "Created", body = Note),
        (status = 413, description = "Request body too large", body = MessageBody),
        (status = 422, description = "Validation failed", body = ValidationErrorBody)
    ))]
pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NoteInput>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = state.notes.create(input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Get a note by ID.
#[utoipa::path(get, path = "/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Note not found", body = MessageBody)
    ))]
pub async fn get_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.notes.get(id).await?))
}

/// Replace a note's title and content and regenerate its summary.
#[utoipa::path(put, path = "/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    request_body = NoteInput,
    responses(
        (status = 200, description = "Updated", body = Note),
        (status = 404, description = "Note not found", body = MessageBody),
        (status = 413, description = "Request body too large", body = MessageBody),
        (status = 422, description = "Validation failed", body = ValidationErrorBody)
    ))]
pub async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    ValidatedJson(input): ValidatedJson<NoteInput>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.notes.update(id, input).await?))
}

/// Permanently delete a note.
#[utoipa::path(delete, path = "/notes/{id}", tag = "Notes",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Note not found", body = MessageBody)
    ))]
pub async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<StatusCode, ApiError> {
    state.notes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
