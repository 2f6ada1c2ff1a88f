//! Integration tests for KeepNote
//!
//! These tests exercise the full HTTP surface against a real server:
//! list, add (valid and invalid), delete, edit form, and update.

use keepnote::database::{create_pool, Note, Repository};
use keepnote::http::{router, AppState};
use keepnote::services::NotesService;
use tempfile::TempDir;

/// Spawn the application on an ephemeral port and return its base URL,
/// a handle to the service for direct assertions, and the tempdir
/// keeping the database alive.
async fn spawn_test_server() -> (String, NotesService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path).await.unwrap();
    let notes = NotesService::new(Repository::new(pool));
    let app = router(AppState::new(notes.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, notes, temp_dir)
}

/// Client that does not follow redirects, so 303s stay observable.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn add_note(base_url: &str, title: &str, content: &str, status: &str) -> reqwest::Response {
    client()
        .post(format!("{}/add", base_url))
        .form(&[
            ("noteTitle", title),
            ("noteContent", content),
            ("noteStatus", status),
        ])
        .send()
        .await
        .unwrap()
}

async fn stored_notes(notes: &NotesService) -> Vec<Note> {
    notes.list_notes().await.unwrap()
}

#[tokio::test]
async fn test_empty_list_renders() {
    let (base_url, _notes, _temp) = spawn_test_server().await;

    let response = client().get(&base_url).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("KeepNote"));
}

#[tokio::test]
async fn test_add_note_redirects_and_persists() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    let response = add_note(&base_url, "Groceries", "Milk and eggs", "pending").await;

    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"], "/");

    let stored = stored_notes(&notes).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Groceries");

    // The new note shows up in the list view exactly once
    let body = client().get(&base_url).send().await.unwrap().text().await.unwrap();
    assert_eq!(body.matches("Groceries").count(), 1);
}

#[tokio::test]
async fn test_add_note_with_empty_field_is_rejected() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    add_note(&base_url, "Existing", "Body", "pending").await;

    for (title, content, status) in [
        ("", "Body", "pending"),
        ("Title", "", "pending"),
        ("Title", "Body", ""),
    ] {
        let response = add_note(&base_url, title, content, status).await;

        // Error-annotated list view, not a redirect
        assert_eq!(response.status(), 200);
        let body = response.text().await.unwrap();
        assert!(body.contains("Fields should not be empty"));
        assert!(body.contains("Existing"));
    }

    // Nothing was persisted
    assert_eq!(stored_notes(&notes).await.len(), 1);
}

#[tokio::test]
async fn test_delete_note() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    add_note(&base_url, "Keep", "Body", "pending").await;
    add_note(&base_url, "Remove", "Body", "pending").await;

    let stored = stored_notes(&notes).await;
    let remove_id = stored.iter().find(|n| n.title == "Remove").unwrap().id;

    let response = client()
        .get(format!("{}/delete?noteId={}", base_url, remove_id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);

    let remaining = stored_notes(&notes).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Keep");
}

#[tokio::test]
async fn test_delete_missing_note_is_noop() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    add_note(&base_url, "Keep", "Body", "pending").await;

    let response = client()
        .get(format!("{}/delete?noteId=9999", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(stored_notes(&notes).await.len(), 1);
}

#[tokio::test]
async fn test_edit_form_is_prepopulated() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    add_note(&base_url, "Original title", "Original content", "pending").await;
    let id = stored_notes(&notes).await[0].id;

    let response = client()
        .get(format!("{}/updateNote?noteId={}", base_url, id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Original title"));
    assert!(body.contains("Original content"));
    assert!(body.contains(&format!(r#"name="noteId" value="{}""#, id)));
}

#[tokio::test]
async fn test_edit_form_for_missing_note_is_404() {
    let (base_url, _notes, _temp) = spawn_test_server().await;

    let response = client()
        .get(format!("{}/updateNote?noteId=123", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_note_persists_under_same_id() {
    let (base_url, notes, _temp) = spawn_test_server().await;

    add_note(&base_url, "Before", "Old content", "pending").await;
    let original = stored_notes(&notes).await.remove(0);

    let response = client()
        .post(format!("{}/update", base_url))
        .form(&[
            ("noteId", original.id.to_string().as_str()),
            ("noteTitle", "After"),
            ("noteContent", "New content"),
            ("noteStatus", "completed"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"], "/");

    let stored = stored_notes(&notes).await;
    assert_eq!(stored.len(), 1);
    let updated = &stored[0];
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "After");
    assert_eq!(updated.content, "New content");
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    // The list reflects the mutation exactly once
    let body = client().get(&base_url).send().await.unwrap().text().await.unwrap();
    assert_eq!(body.matches("After").count(), 1);
    assert!(!body.contains("Before"));
}
