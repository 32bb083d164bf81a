//! Notes CRUD handlers.
//!
//! Bodies are read as raw bytes and parsed by hand so every rejection
//! shares the same `{"error": "Invalid input"}` shape regardless of
//! whether the body is absent, malformed, or missing fields.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::store::NotePatch;

#[derive(Debug, Deserialize)]
struct CreateNote {
    name: Option<String>,
    content: Option<String>,
}

/// Parse a JSON request body, treating malformed input as absent.
pub(crate) fn parse_json_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Option<T> {
    serde_json::from_slice(body).ok()
}

/// 400 `{"error": "Invalid input"}`.
pub(crate) fn invalid_input() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Invalid input"})),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Note not found"})),
    )
        .into_response()
}

/// `GET /api/notes`: all notes keyed by id.
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Response {
    Json(state.store.list()).into_response()
}

/// `POST /api/notes`: create from `{name, content}`; both keys required.
pub async fn create_note(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(request) = parse_json_body::<CreateNote>(&body) else {
        return invalid_input();
    };
    let (Some(name), Some(content)) = (request.name, request.content) else {
        return invalid_input();
    };

    let note_id = state.store.insert(name, content);
    (
        StatusCode::CREATED,
        Json(json!({"message": "Note created", "note_id": note_id})),
    )
        .into_response()
}

/// `GET /api/notes/{id}`: one note, or 404.
pub async fn get_note(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    match state.store.get(id) {
        Some(note) => Json(note).into_response(),
        None => not_found(),
    }
}

/// `PUT /api/notes/{id}`: partial update; always refreshes the date.
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Response {
    if state.store.get(id).is_none() {
        return not_found();
    }

    let Some(value) = parse_json_body::<Value>(&body) else {
        return invalid_input();
    };
    let Some(fields) = value.as_object() else {
        return invalid_input();
    };
    if fields.is_empty() {
        return invalid_input();
    }

    let patch = NotePatch {
        name: fields.get("name").and_then(Value::as_str).map(str::to_owned),
        content: fields
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_owned),
    };
    match state.store.update(id, patch) {
        Some(note) => Json(json!({"message": "Note updated", "note": note})).into_response(),
        None => not_found(),
    }
}

/// `DELETE /api/notes/{id}`.
pub async fn delete_note(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    if state.store.remove(id) {
        Json(json!({"message": "Note deleted"})).into_response()
    } else {
        not_found()
    }
}

/// `GET /downloadall`: every note as a plain-text attachment, or 404 when
/// the store is empty.
pub async fn download_all(State(state): State<Arc<AppState>>) -> Response {
    let notes = state.store.list();
    if notes.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "No notes available"})),
        )
            .into_response();
    }

    let mut text = String::new();
    for (id, note) in &notes {
        // write! into a String cannot fail
        let _ = writeln!(text, "ID: {id}");
        let _ = writeln!(text, "Name: {}", note.name);
        let _ = writeln!(text, "Content: {}", note.content);
        let _ = writeln!(text, "Date: {}", note.date);
        let _ = writeln!(text, "{}", "-".repeat(40));
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"notes.txt\"",
            ),
        ],
        text,
    )
        .into_response()
}
