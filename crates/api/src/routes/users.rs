//! Route definitions for user registration and profiles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /       -> register
/// GET  /{id}   -> profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/{id}", get(users::get))
}
