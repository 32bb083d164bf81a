#![allow(clippy::unwrap_used)]
//! Integration tests for the notes HTTP API.
//!
//! Routers are driven in-process with `tower::ServiceExt::oneshot`.
//!
//! These tests cover:
//! - Listing, creating, reading, updating, deleting notes
//! - The `{"error": "Invalid input"}` 400 shape for bad bodies
//! - 404s for unknown note ids
//! - The cookie auth guard: 401, login, bad credentials, logout
//! - The plain-text bulk download

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use notes_api::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn app() -> Router {
    build_router(Arc::new(AppState::new(true)))
}

fn open_app() -> Router {
    build_router(Arc::new(AppState::new(false)))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "user=admin")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, "user=admin")
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, name: &str, content: &str) -> u64 {
    let body = json!({"name": name, "content": content});
    let (status, value) = send(app, json_request("POST", "/api/notes", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    value["note_id"].as_u64().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// CRUD
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_notes() {
    let app = app();
    let id = create(&app, "Test Note", "Test Content").await;

    let (status, value) = send(&app, bare_request("GET", "/api/notes")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = &value[id.to_string()];
    assert_eq!(listed["name"], "Test Note");
    assert_eq!(listed["content"], "Test Content");
}

#[tokio::test]
async fn test_create_note_success() {
    let app = app();
    let body = json!({"name": "New Note", "content": "Note Content"});
    let (status, value) = send(&app, json_request("POST", "/api/notes", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(value["message"], "Note created");
    let id = value["note_id"].as_u64().unwrap();

    let (status, fetched) =
        send(&app, bare_request("GET", &format!("/api/notes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "New Note");
    assert_eq!(fetched["content"], "Note Content");
}

#[tokio::test]
async fn test_create_note_invalid_data() {
    let app = app();
    let cases = [
        json!({"name": ""}),
        json!({"content": "No name provided"}),
        json!({}),
    ];
    for body in &cases {
        let (status, value) = send(&app, json_request("POST", "/api/notes", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(value["error"], "Invalid input", "body: {body}");
    }
}

#[tokio::test]
async fn test_get_note_by_id() {
    let app = app();
    let id = create(&app, "Test Note", "Test Content").await;

    let (status, value) =
        send(&app, bare_request("GET", &format!("/api/notes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["name"], "Test Note");
    assert!(!value["date"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_nonexistent_note() {
    let app = app();
    let (status, value) = send(&app, bare_request("GET", "/api/notes/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["error"], "Note not found");
}

#[tokio::test]
async fn test_update_note_success() {
    let app = app();
    let id = create(&app, "Old Note", "Old Content").await;

    let body = json!({"name": "Updated Note", "content": "Updated Content"});
    let (status, value) =
        send(&app, json_request("PUT", &format!("/api/notes/{id}"), &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["message"], "Note updated");
    assert_eq!(value["note"]["name"], "Updated Note");

    let (_, fetched) = send(&app, bare_request("GET", &format!("/api/notes/{id}"))).await;
    assert_eq!(fetched["content"], "Updated Content");
}

#[tokio::test]
async fn test_update_note_partial_patch_keeps_other_field() {
    let app = app();
    let id = create(&app, "Keep Me", "Original").await;

    let body = json!({"content": "Patched"});
    let (status, value) =
        send(&app, json_request("PUT", &format!("/api/notes/{id}"), &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["note"]["name"], "Keep Me");
    assert_eq!(value["note"]["content"], "Patched");
}

#[tokio::test]
async fn test_update_note_empty_body_rejected() {
    let app = app();
    let id = create(&app, "Note", "Content").await;

    let (status, value) =
        send(&app, json_request("PUT", &format!("/api/notes/{id}"), &json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Invalid input");
}

#[tokio::test]
async fn test_update_nonexistent_note() {
    let app = app();
    let body = json!({"name": "X"});
    let (status, value) = send(&app, json_request("PUT", "/api/notes/99", &body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["error"], "Note not found");
}

#[tokio::test]
async fn test_delete_note_success() {
    let app = app();
    let id = create(&app, "Note to Delete", "Content").await;

    let (status, value) =
        send(&app, bare_request("DELETE", &format!("/api/notes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["message"], "Note deleted");

    let (status, _) = send(&app, bare_request("GET", &format!("/api/notes/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_note() {
    let app = app();
    let (status, value) = send(&app, bare_request("DELETE", "/api/notes/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["error"], "Note not found");
}

#[tokio::test]
async fn test_note_ids_are_not_reused_after_delete() {
    let app = app();
    let first = create(&app, "A", "a").await;
    let (status, _) =
        send(&app, bare_request("DELETE", &format!("/api/notes/{first}"))).await;
    assert_eq!(status, StatusCode::OK);

    let second = create(&app, "B", "b").await;
    assert_ne!(first, second);
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_cookie_is_unauthorized() {
    let app = app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/notes")
        .body(Body::empty())
        .unwrap();
    let (status, value) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(value["error"], "Unauthorized. Please log in.");
}

#[tokio::test]
async fn test_login_sets_user_cookie() {
    let app = app();
    let body = json!({"username": "admin", "password": "password123"});
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("user=admin"), "got: {cookie}");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let app = app();
    let body = json!({"username": "admin", "password": "wrong"});
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, value) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(value["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = app();
    let body = json!({"username": "admin"});
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, value) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Invalid input");
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let app = app();
    let response = app
        .clone()
        .oneshot(bare_request("POST", "/logout"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.contains("Max-Age=0"), "got: {cookie}");
}

#[tokio::test]
async fn test_auth_disabled_allows_bare_requests() {
    let app = open_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/notes")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}

// ─────────────────────────────────────────────────────────────────────────────
// Download
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_download_all_empty_store() {
    let app = app();
    let (status, value) = send(&app, bare_request("GET", "/downloadall")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["error"], "No notes available");
}

#[tokio::test]
async fn test_download_all_returns_attachment() {
    let app = app();
    create(&app, "First", "Alpha").await;
    create(&app, "Second", "Beta").await;

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/downloadall"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.contains("notes.txt"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Name: First"));
    assert!(text.contains("Content: Beta"));
    assert!(text.contains(&"-".repeat(40)));
}
