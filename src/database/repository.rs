//! Repository layer for database operations
//!
//! CRUD operations for notes. Identifiers are assigned by SQLite and
//! stable for a note's lifetime.

use super::models::*;
use crate::error::{AppError, Result};
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new note. Both timestamps are stamped server-side.
    pub async fn create_note(&self, req: CreateNoteRequest) -> Result<Note> {
        let now = Utc::now();

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created note: {}", note.id);
        Ok(note)
    }

    /// Get a note by ID
    pub async fn get_note(&self, id: i64) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT * FROM notes WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NoteNotFound(id))?;

        Ok(note)
    }

    /// List all notes in insertion order
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT * FROM notes ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Update a note's title, content, and status.
    ///
    /// created_at is left untouched; updated_at is re-stamped.
    pub async fn update_note(&self, req: UpdateNoteRequest) -> Result<Note> {
        let now = Utc::now();

        let rows_affected = sqlx::query(
            r#"
            UPDATE notes
            SET title = ?, content = ?, status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.status)
        .bind(now)
        .bind(req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NoteNotFound(req.id));
        }

        tracing::debug!("Updated note: {}", req.id);
        self.get_note(req.id).await
    }

    /// Delete a note. Deleting an id that does not exist is a no-op.
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let rows = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!("Deleted note: {} ({} rows)", id, rows);
        Ok(())
    }
}
