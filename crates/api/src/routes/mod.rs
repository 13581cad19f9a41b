pub mod admin;
pub mod health;
pub mod neural;
pub mod sessions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                   register (POST)
/// /users/{id}                              profile (GET)
/// /users/{id}/sessions                     history (GET), create today's (POST)
/// /users/{id}/sessions/availability        recording gate (GET)
/// /users/{id}/neural/availability          track gate (GET)
/// /users/{id}/neural/generate              mark track generated (POST)
/// /users/{id}/neural/complete              mark track listened (POST)
///
/// /admin/users/{id}/skip-day               debug day-skip (POST, token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/users",
            users::router().merge(sessions::router()).merge(neural::router()),
        )
        .nest("/admin", admin::router())
}
