//! HTTP module
//!
//! Router construction, shared application state, request handlers,
//! and the server-side views they render.

pub mod handlers;
pub mod views;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::services::NotesService;

/// Shared state available to every handler
#[derive(Clone)]
pub struct AppState {
    pub notes: NotesService,
}

impl AppState {
    pub fn new(notes: NotesService) -> Self {
        Self { notes }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_notes))
        .route("/add", post(handlers::add_note))
        .route("/delete", get(handlers::delete_note))
        .route("/updateNote", get(handlers::edit_note))
        .route("/update", post(handlers::update_note))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
