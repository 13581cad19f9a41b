//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use neurowealth_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    /// The user's epoch for day-number math. Fixed at registration; the
    /// admin day-skip is the only sanctioned mutation.
    pub first_access_date: Timestamp,
    pub current_streak: i32,
    pub longest_streak: i32,
    /// Disables the one-per-day rule for this account (manual QA).
    pub is_debug: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub first_access_date: Timestamp,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub is_debug: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            first_access_date: user.first_access_date,
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
            is_debug: user.is_debug,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub first_access_date: Timestamp,
    pub is_debug: bool,
}
