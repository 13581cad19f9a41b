//! Handlers for `/users/{id}/sessions` (daily voice-analysis sessions).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use neurowealth_core::availability::{recording_availability, Availability};
use neurowealth_core::clock;
use neurowealth_core::day::day_number;
use neurowealth_core::scoring::{initial_score, next_score};
use neurowealth_core::session::SessionRecord;
use neurowealth_core::streak::update_streaks;
use neurowealth_core::types::DbId;
use neurowealth_db::models::session::{CreateSession, SessionResponse};
use neurowealth_db::repositories::{SessionRepo, UserRepo};

use crate::error::AppResult;
use crate::handlers::load_user;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Availability decision plus the current day number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub day_number: i64,
    #[serde(flatten)]
    pub decision: Availability,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/{id}/sessions/availability
///
/// May the user record a new voice sample right now?
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AvailabilityResponse>>> {
    let user = load_user(&state.pool, id).await?;
    let records = session_records(&state, id).await?;
    let now = clock::now();

    let decision = recording_availability(user.first_access_date, &records, now, !user.is_debug);
    let body = AvailabilityResponse {
        day_number: day_number(user.first_access_date, now),
        decision,
    };
    Ok(Json(DataResponse { data: body }))
}

/// GET /api/v1/users/{id}/sessions
///
/// Full session history, oldest first (dashboard feed).
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SessionResponse>>>> {
    load_user(&state.pool, id).await?;
    let sessions = SessionRepo::list_for_user(&state.pool, id).await?;

    let body = sessions.into_iter().map(SessionResponse::from).collect();
    Ok(Json(DataResponse { data: body }))
}

/// POST /api/v1/users/{id}/sessions
///
/// Create today's completed session. A denial from the one-per-day gate
/// is returned as a 409 whose body is the decision itself (reason plus
/// `nextAvailableAt` for the client countdown) -- routine flow control,
/// not an error envelope.
pub async fn create(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let user = load_user(&state.pool, id).await?;
    let rows = SessionRepo::list_for_user(&state.pool, id).await?;
    let records: Vec<SessionRecord> = rows.iter().map(|s| s.to_record()).collect();
    let now = clock::now();

    let decision = recording_availability(user.first_access_date, &records, now, !user.is_debug);
    if !decision.allowed {
        return Ok((StatusCode::CONFLICT, Json(decision)).into_response());
    }

    let today = day_number(user.first_access_date, now);
    let last_completed = rows
        .iter()
        .filter(|s| s.completed)
        .max_by_key(|s| s.created_at);

    // Thread-local RNG kept out of any await scope.
    let wealth_score = {
        let mut rng = rand::rng();
        match last_completed {
            Some(prev) => next_score(prev.wealth_score, &mut rng),
            None => initial_score(&mut rng),
        }
    };

    let last_completed_day = last_completed.map(|s| day_number(user.first_access_date, s.created_at));
    let (current_streak, longest_streak) = update_streaks(
        user.current_streak,
        user.longest_streak,
        last_completed_day,
        today,
    );

    // The day_key column backs the write-time uniqueness guard; debug
    // accounts insert NULL and stay exempt.
    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            created_at: now,
            completed: true,
            wealth_score,
            day_key: (!user.is_debug).then_some(today),
        },
    )
    .await?;

    UserRepo::update_streaks(&state.pool, user.id, current_streak, longest_streak).await?;

    tracing::info!(
        user_id = user.id,
        session_id = session.id,
        day = today,
        wealth_score,
        "Session created"
    );

    let body = DataResponse {
        data: SessionResponse::from(session),
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Load a user's history as the core's storage-agnostic records.
pub(crate) async fn session_records(
    state: &AppState,
    user_id: DbId,
) -> AppResult<Vec<SessionRecord>> {
    let rows = SessionRepo::list_for_user(&state.pool, user_id).await?;
    Ok(rows.iter().map(|s| s.to_record()).collect())
}
