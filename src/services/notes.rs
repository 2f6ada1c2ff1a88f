//! Notes service
//!
//! High-level operations over the notes repository. Field validation
//! lives in the HTTP layer; this layer owns persistence and logging.

use crate::database::{CreateNoteRequest, Note, Repository, UpdateNoteRequest};
use crate::error::Result;

/// Service for managing notes
#[derive(Clone)]
pub struct NotesService {
    repo: Repository,
}

impl NotesService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a new note
    pub async fn create_note(
        &self,
        title: String,
        content: String,
        status: String,
    ) -> Result<Note> {
        tracing::info!("Creating new note: {}", title);

        let note = self
            .repo
            .create_note(CreateNoteRequest {
                title,
                content,
                status,
            })
            .await?;

        tracing::info!("Note created: {}", note.id);

        Ok(note)
    }

    /// Get a note by ID
    pub async fn get_note(&self, id: i64) -> Result<Note> {
        self.repo.get_note(id).await
    }

    /// List all notes
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        self.repo.list_notes().await
    }

    /// Update a note's title, content, and status under its existing id
    pub async fn update_note(
        &self,
        id: i64,
        title: String,
        content: String,
        status: String,
    ) -> Result<Note> {
        tracing::debug!("Updating note: {}", id);

        let note = self
            .repo
            .update_note(UpdateNoteRequest {
                id,
                title,
                content,
                status,
            })
            .await?;

        tracing::debug!("Note updated: {}", note.id);

        Ok(note)
    }

    /// Delete a note by ID
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting note: {}", id);

        self.repo.delete_note(id).await?;

        Ok(())
    }
}
