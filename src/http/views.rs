//! Server-side views
//!
//! The two pages the application serves, built as plain HTML strings.
//! Every note-supplied value passes through html_escape before
//! interpolation.

use crate::database::Note;

/// Render the list view: all notes, the add form, and an optional
/// inline error banner.
pub fn render_index(notes: &[Note], error: Option<&str>) -> String {
    let rows = notes
        .iter()
        .map(|note| {
            format!(
                r#"            <tr>
                <td>{id}</td>
                <td>{title}</td>
                <td>{content}</td>
                <td>{status}</td>
                <td>{created_at}</td>
                <td><a href="/updateNote?noteId={id}">Edit</a></td>
                <td><a href="/delete?noteId={id}">Delete</a></td>
            </tr>"#,
                id = note.id,
                title = html_escape(&note.title),
                content = html_escape(&note.content),
                status = html_escape(&note.status),
                created_at = note.created_at.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let error_banner = match error {
        Some(message) => format!(
            r#"        <p class="error">{}</p>"#,
            html_escape(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>KeepNote</title>
</head>
<body>
    <h1>KeepNote</h1>
{error_banner}
    <table border="1">
        <thead>
            <tr>
                <th>Id</th><th>Title</th><th>Content</th><th>Status</th>
                <th>Created</th><th></th><th></th>
            </tr>
        </thead>
        <tbody>
{rows}
        </tbody>
    </table>
    <h2>Add a note</h2>
    <form action="/add" method="post">
        <input type="text" name="noteTitle" placeholder="Title">
        <input type="text" name="noteContent" placeholder="Content">
        <input type="text" name="noteStatus" placeholder="Status">
        <button type="submit">Add</button>
    </form>
</body>
</html>"#,
    )
}

/// Render the edit view, pre-populated with one note's current values.
pub fn render_update(note: &Note) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Edit note {id}</title>
</head>
<body>
    <h1>Edit note {id}</h1>
    <form action="/update" method="post">
        <input type="hidden" name="noteId" value="{id}">
        <input type="text" name="noteTitle" value="{title}">
        <input type="text" name="noteContent" value="{content}">
        <input type="text" name="noteStatus" value="{status}">
        <button type="submit">Save</button>
    </form>
    <p><a href="/">Back to list</a></p>
</body>
</html>"#,
        id = note.id,
        title = html_escape(&note.title),
        content = html_escape(&note.content),
        status = html_escape(&note.status),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
