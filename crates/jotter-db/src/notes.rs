//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row, Transaction};
use tracing::debug;
use uuid::Uuid;

use jotter_core::{Error, Note, NoteRepository, Result, UpdateNoteRequest};

use crate::pool::log_pool_metrics;

const NOTE_COLUMNS: &str = "id, title, content, ai_summary, created_at, updated_at";

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: &sqlx::postgres::PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        ai_summary: row.get("ai_summary"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, note: Note) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.insert_tx(&mut tx, note).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let query = format!("SELECT {} FROM note WHERE id = $1", NOTE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))?;
        Ok(map_row_to_note(&row))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let query = format!(
            "SELECT {} FROM note ORDER BY created_at ASC, id ASC",
            NOTE_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(rows.iter().map(map_row_to_note).collect())
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.update_tx(&mut tx, id, req).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        self.delete_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM note WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        log_pool_metrics(&self.pool);
        Ok(())
    }
}

// =============================================================================
// TRANSACTION-AWARE VARIANTS
// =============================================================================

/// Transaction-aware variants, so several repository calls can share one
/// transactional boundary.
impl PgNoteRepository {
    /// Insert a note within an existing transaction.
    pub async fn insert_tx(&self, tx: &mut Transaction<'_, Postgres>, note: Note) -> Result<Note> {
        let query = format!(
            "INSERT INTO note (id, title, content, ai_summary, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(note.id)
            .bind(&note.title)
            .bind(&note.content)
            .bind(&note.ai_summary)
            .bind(note.created_at)
            .bind(note.updated_at)
            .fetch_one(&mut **tx)
            .await
            .map_err(Error::Database)?;

        debug!(subsystem = "db", component = "notes", op = "insert", note_id = %note.id, "Note inserted");
        Ok(map_row_to_note(&row))
    }

    /// Replace a note's title, content and summary within an existing transaction.
    ///
    /// `updated_at` is clamped to at least one microsecond after `created_at`.
    pub async fn update_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        req: UpdateNoteRequest,
    ) -> Result<Note> {
        let query = format!(
            "UPDATE note
             SET title = $1, content = $2, ai_summary = $3,
                 updated_at = GREATEST($4, created_at + interval '1 microsecond')
             WHERE id = $5
             RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(&req.title)
            .bind(&req.content)
            .bind(&req.ai_summary)
            .bind(req.updated_at)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))?;

        debug!(subsystem = "db", component = "notes", op = "update", note_id = %id, "Note updated");
        Ok(map_row_to_note(&row))
    }

    /// Delete a note within an existing transaction.
    pub async fn delete_tx(&self, tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(subsystem = "db", component = "notes", op = "delete", note_id = %id, "Note deleted");
        Ok(())
    }
}
