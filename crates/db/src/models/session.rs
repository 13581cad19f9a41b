//! Wealth session entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use neurowealth_core::session::SessionRecord;
use neurowealth_core::types::{DbId, Timestamp};

/// Full session row from the `wealth_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub completed: bool,
    /// 0-100, non-decreasing per user, clamped to a ceiling.
    pub wealth_score: i32,
    pub has_generated_gamma_session: bool,
    pub gamma_session_completed: bool,
    /// Day number computed at insert time for the per-day unique index.
    /// NULL for debug accounts, which are exempt from the one-per-day
    /// rule (Postgres unique indexes ignore NULLs).
    pub day_key: Option<i64>,
}

impl Session {
    /// The storage-agnostic view consumed by the availability gate and
    /// the day-skip planner.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id,
            created_at: self.created_at,
            completed: self.completed,
            has_generated_gamma: self.has_generated_gamma_session,
            gamma_completed: self.gamma_session_completed,
        }
    }
}

/// Session representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub completed: bool,
    pub wealth_score: i32,
    pub has_generated_gamma_session: bool,
    pub gamma_session_completed: bool,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse {
            id: session.id,
            user_id: session.user_id,
            created_at: session.created_at,
            completed: session.completed,
            wealth_score: session.wealth_score,
            has_generated_gamma_session: session.has_generated_gamma_session,
            gamma_session_completed: session.gamma_session_completed,
        }
    }
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub completed: bool,
    pub wealth_score: i32,
    /// `None` for debug accounts (no per-day uniqueness enforced).
    pub day_key: Option<i64>,
}
