//! Cookie-based login.
//!
//! Authentication is a bare `user` cookie holding the username; the
//! credential table is fixed in [`AppState`]. Every route except
//! `POST /login` goes through [`require_user_cookie`].

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::routes::{invalid_input, parse_json_body};

/// Cookie carrying the logged-in username.
pub const USER_COOKIE: &str = "user";

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

/// Extract the `user` cookie value from request headers.
#[must_use]
pub fn user_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(USER_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_owned)
    })
}

/// Guard: protected routes require a `user` cookie unless the state
/// disables the check.
pub async fn require_user_cookie(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.require_auth || user_cookie(request.headers()).is_some() {
        return next.run(request).await;
    }
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized. Please log in."})),
    )
        .into_response()
}

/// `POST /login`: check credentials and set the `user` cookie.
pub async fn login(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(request) = parse_json_body::<LoginRequest>(&body) else {
        return invalid_input();
    };
    let (Some(username), Some(password)) = (request.username, request.password) else {
        return invalid_input();
    };

    if state.users.get(&username) == Some(&password) {
        let mut response = Json(json!({"message": "Login successful"})).into_response();
        set_cookie(&mut response, &format!("{USER_COOKIE}={username}; Path=/"));
        response
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()
    }
}

/// `POST /logout`: expire the cookie.
pub async fn logout() -> Response {
    let mut response = Json(json!({"message": "Logged out"})).into_response();
    set_cookie(
        &mut response,
        &format!("{USER_COOKIE}=; Path=/; Max-Age=0"),
    );
    response
}

fn set_cookie(response: &mut Response, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
}
