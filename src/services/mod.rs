//! Service layer
//!
//! Business logic between the HTTP handlers and the repository.

pub mod notes;

pub use notes::NotesService;
