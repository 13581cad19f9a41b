//! Route definitions for the daily neural audio track.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::neural;
use crate::state::AppState;

/// Routes mounted at `/users` (neural sub-resource).
///
/// ```text
/// GET  /{id}/neural/availability  -> track gate
/// POST /{id}/neural/generate      -> mark track generated
/// POST /{id}/neural/complete      -> mark track listened in full
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/neural/availability", get(neural::availability))
        .route("/{id}/neural/generate", post(neural::generate))
        .route("/{id}/neural/complete", post(neural::complete))
}
