//! Route definitions for admin operations.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the admin token header.
///
/// ```text
/// POST /users/{id}/skip-day  -> simulate one elapsed day
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}/skip-day", post(admin::skip_day))
}
