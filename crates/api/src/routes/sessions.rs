//! Route definitions for daily voice-analysis sessions.

use axum::routing::get;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/users` (session sub-resource).
///
/// ```text
/// GET  /{id}/sessions               -> history
/// POST /{id}/sessions               -> create today's session
/// GET  /{id}/sessions/availability  -> recording gate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/sessions",
            get(sessions::list).post(sessions::create),
        )
        .route("/{id}/sessions/availability", get(sessions::availability))
}
