//! Handlers for the `/admin` resource (debug day-skip).

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use neurowealth_core::clock;
use neurowealth_core::day::day_number;
use neurowealth_core::dayskip::plan_day_skip;
use neurowealth_core::error::CoreError;
use neurowealth_core::types::DbId;
use neurowealth_db::repositories::{SessionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::handlers::sessions::session_records;
use crate::response::DataResponse;
use crate::state::AppState;

/// Header carrying the shared admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Response body for `POST /admin/users/{id}/skip-day`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipDayResponse {
    /// Day number before the skip.
    pub day_before: i64,
    /// Day number after the skip, recomputed against the shifted epoch.
    pub day_after: i64,
    /// How many of today's sessions were moved back one day.
    pub sessions_moved: u64,
}

/// POST /api/v1/admin/users/{id}/skip-day
///
/// Simulate one elapsed calendar day for manual QA. The plan is computed
/// against the pre-mutation epoch, then applied in order: today's
/// sessions move back one day first, the epoch second. Reversing that
/// order would reclassify which sessions are "today" mid-operation.
pub async fn skip_day(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Json<DataResponse<SkipDayResponse>>> {
    require_admin(&state, &headers)?;

    let user = load_user(&state.pool, id).await?;
    let records = session_records(&state, id).await?;
    let now = clock::now();

    let plan = plan_day_skip(user.first_access_date, now, &records);

    let sessions_moved = SessionRepo::shift_back_one_day(&state.pool, &plan.session_ids).await?;
    let user = UserRepo::set_first_access_date(&state.pool, id, plan.new_first_access)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let day_after = day_number(user.first_access_date, now);
    tracing::info!(
        user_id = id,
        day_before = plan.current_day,
        day_after,
        sessions_moved,
        "Day skipped"
    );

    Ok(Json(DataResponse {
        data: SkipDayResponse {
            day_before: plan.current_day,
            day_after,
            sessions_moved,
        },
    }))
}

/// Defensive admin re-check: the full authorization story lives outside
/// this service, but day-skip is destructive enough to refuse any caller
/// that does not present the shared token.
fn require_admin(state: &AppState, headers: &HeaderMap) -> AppResult<()> {
    let expected = state
        .config
        .admin_token
        .as_deref()
        .ok_or_else(|| forbidden("Admin operations are disabled"))?;

    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| forbidden("Missing admin token"))?;

    if presented != expected {
        return Err(forbidden("Invalid admin token"));
    }
    Ok(())
}

fn forbidden(msg: &str) -> AppError {
    AppError::Core(CoreError::Forbidden(msg.to_string()))
}
