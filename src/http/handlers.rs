//! Request handlers
//!
//! Thin functions mapping form and query parameters onto the notes
//! service, then rendering a view or redirecting back to the list.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::views;
use super::AppState;
use crate::error::Result;

/// Form fields shared by the add and update endpoints. The parameter
/// names are part of the HTTP surface and stay camel-cased.
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(rename = "noteTitle")]
    pub title: String,
    #[serde(rename = "noteContent")]
    pub content: String,
    #[serde(rename = "noteStatus")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteIdParams {
    #[serde(rename = "noteId")]
    pub note_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "noteTitle")]
    pub title: String,
    #[serde(rename = "noteContent")]
    pub content: String,
    #[serde(rename = "noteStatus")]
    pub status: String,
}

/// GET / - render the list view with all notes
pub async fn list_notes(State(state): State<AppState>) -> Result<Html<String>> {
    let notes = state.notes.list_notes().await?;
    Ok(Html(views::render_index(&notes, None)))
}

/// POST /add - validate the fields and persist a new note.
///
/// Any empty field re-renders the list with an inline error and no
/// persistence attempted. Timestamps are stamped server-side, never
/// accepted from the client.
pub async fn add_note(
    State(state): State<AppState>,
    Form(form): Form<NoteForm>,
) -> Result<Response> {
    if form.title.is_empty() || form.content.is_empty() || form.status.is_empty() {
        tracing::debug!("Rejected note with empty fields");
        let notes = state.notes.list_notes().await?;
        let page = views::render_index(&notes, Some("Fields should not be empty"));
        return Ok(Html(page).into_response());
    }

    state
        .notes
        .create_note(form.title, form.content, form.status)
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// GET /delete?noteId=N - delete unconditionally and redirect.
///
/// A missing id deletes nothing; the redirect happens either way.
pub async fn delete_note(
    State(state): State<AppState>,
    Query(params): Query<NoteIdParams>,
) -> Result<Redirect> {
    state.notes.delete_note(params.note_id).await?;
    Ok(Redirect::to("/"))
}

/// GET /updateNote?noteId=N - render the edit view for one note
pub async fn edit_note(
    State(state): State<AppState>,
    Query(params): Query<NoteIdParams>,
) -> Result<Html<String>> {
    let note = state.notes.get_note(params.note_id).await?;
    Ok(Html(views::render_update(&note)))
}

/// POST /update - persist new field values under an existing id
pub async fn update_note(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect> {
    state
        .notes
        .update_note(form.note_id, form.title, form.content, form.status)
        .await?;

    Ok(Redirect::to("/"))
}
