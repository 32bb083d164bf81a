//! # notes-api
//!
//! Minimal in-memory notes CRUD service over HTTP.
//!
//! Notes live only in process memory and are lost on restart. Every route
//! except `POST /login` requires a `user` cookie while the auth guard is
//! enabled. The store sits behind the [`store::NoteStore`] trait so a
//! persistent backend can replace the in-memory map without touching the
//! handlers.

pub mod auth;
pub mod logging;
pub mod routes;
pub mod store;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::auth::{login, logout, require_user_cookie};
use crate::routes::{create_note, delete_note, download_all, get_note, list_notes, update_note};
use crate::store::{MemoryStore, NoteStore};

/// Shared application state: the injected note store, the fixed
/// credential table, and the auth toggle.
pub struct AppState {
    /// Injected store; swap for a persistent backend without touching
    /// the handlers.
    pub store: Arc<dyn NoteStore>,
    /// Username to password.
    pub users: HashMap<String, String>,
    /// When false, the `user`-cookie guard is disabled entirely.
    pub require_auth: bool,
}

impl AppState {
    /// State with the in-memory store and the fixed credential table.
    #[must_use]
    pub fn new(require_auth: bool) -> Self {
        let mut users = HashMap::new();
        users.insert("admin".to_owned(), "password123".to_owned());
        Self {
            store: Arc::new(MemoryStore::new()),
            users,
            require_auth,
        }
    }
}

/// Build the full application router.
///
/// `/login` stays outside the auth guard; everything else requires the
/// `user` cookie while `state.require_auth` holds.
#[must_use]
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/downloadall", get(download_all))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_cookie,
        ));

    Router::new()
        .route("/login", post(login))
        .merge(protected)
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}
