//! Handlers for the `/users` resource (registration, profile).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use neurowealth_core::clock;
use neurowealth_core::day::day_number;
use neurowealth_core::error::CoreError;
use neurowealth_core::types::DbId;
use neurowealth_db::models::user::{CreateUser, UserResponse};
use neurowealth_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// QA accounts exempt from the one-per-day rule.
    #[serde(default)]
    pub is_debug: bool,
}

/// User profile with the computed day number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: UserResponse,
    /// 1-based day index relative to the user's first access.
    pub day_number: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
///
/// Register a new user. The first-access epoch is fixed to the moment of
/// registration; day numbers for this account are computed against it
/// from now on.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserProfile>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            first_access_date: clock::now(),
            is_debug: input.is_debug,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let profile = UserProfile {
        day_number: 1,
        user: user.into(),
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /api/v1/users/{id}
///
/// Profile with streaks and the current day number.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let user = load_user(&state.pool, id).await?;

    let profile = UserProfile {
        day_number: day_number(user.first_access_date, clock::now()),
        user: user.into(),
    };
    Ok(Json(DataResponse { data: profile }))
}
