//! Handlers for `/users/{id}/neural` (daily binaural audio track).
//!
//! One track per day, tied to today's completed voice session: generate
//! marks the track as produced, complete marks it as listened to in
//! full. The gate's three denial states map to fixed UX copy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use neurowealth_core::availability::{
    find_completed_session, gamma_availability, REASON_GAMMA_DONE, REASON_NO_SESSION_TODAY,
};
use neurowealth_core::clock;
use neurowealth_core::day::day_number;
use neurowealth_core::error::CoreError;
use neurowealth_core::types::DbId;
use neurowealth_db::models::session::SessionResponse;
use neurowealth_db::repositories::SessionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::handlers::sessions::{session_records, AvailabilityResponse};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}/neural/availability
///
/// May the user generate a neural track right now?
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AvailabilityResponse>>> {
    let user = load_user(&state.pool, id).await?;
    let records = session_records(&state, id).await?;
    let now = clock::now();

    let decision = gamma_availability(user.first_access_date, &records, now);
    let body = AvailabilityResponse {
        day_number: day_number(user.first_access_date, now),
        decision,
    };
    Ok(Json(DataResponse { data: body }))
}

/// POST /api/v1/users/{id}/neural/generate
///
/// Mark today's session as having a generated track. Denials are 409s
/// carrying the gate's decision body, mirroring session creation.
pub async fn generate(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let user = load_user(&state.pool, id).await?;
    let records = session_records(&state, id).await?;
    let now = clock::now();

    let decision = gamma_availability(user.first_access_date, &records, now);
    if !decision.allowed {
        return Ok((StatusCode::CONFLICT, Json(decision)).into_response());
    }

    let today = day_number(user.first_access_date, now);
    let session = find_completed_session(user.first_access_date, &records, today)
        .ok_or_else(|| AppError::Core(CoreError::Conflict(REASON_NO_SESSION_TODAY.into())))?;

    let updated = SessionRepo::mark_gamma_generated(&state.pool, session.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: session.id,
        }))?;

    tracing::info!(user_id = user.id, session_id = updated.id, "Neural track generated");

    let body = DataResponse {
        data: SessionResponse::from(updated),
    };
    Ok(Json(body).into_response())
}

/// POST /api/v1/users/{id}/neural/complete
///
/// Mark today's generated track as listened to in full. Completing
/// without a generated track is a client bug, so these surface as
/// Conflict errors rather than decision bodies.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    let user = load_user(&state.pool, id).await?;
    let records = session_records(&state, id).await?;
    let now = clock::now();

    let today = day_number(user.first_access_date, now);
    let session = find_completed_session(user.first_access_date, &records, today)
        .ok_or_else(|| AppError::Core(CoreError::Conflict(REASON_NO_SESSION_TODAY.into())))?;

    if !session.has_generated_gamma {
        return Err(AppError::Core(CoreError::Conflict(
            "No neural session generated today".into(),
        )));
    }
    if session.gamma_completed {
        return Err(AppError::Core(CoreError::Conflict(
            REASON_GAMMA_DONE.into(),
        )));
    }

    let updated = SessionRepo::mark_gamma_completed(&state.pool, session.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: session.id,
        }))?;

    tracing::info!(user_id = user.id, session_id = updated.id, "Neural track completed");

    Ok(Json(DataResponse {
        data: SessionResponse::from(updated),
    }))
}
