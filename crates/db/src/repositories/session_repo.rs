//! Repository for the `wealth_sessions` table.

use sqlx::PgPool;

use neurowealth_core::types::DbId;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, created_at, completed, wealth_score, \
                        has_generated_gamma_session, gamma_session_completed, day_key";

/// Provides CRUD operations for wealth sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    ///
    /// For non-debug users `day_key` carries the computed day number and
    /// the `uq_wealth_sessions_user_day` index turns a concurrent
    /// duplicate into a unique violation instead of a second row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO wealth_sessions (user_id, created_at, completed, wealth_score, day_key)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(input.created_at)
            .bind(input.completed)
            .bind(input.wealth_score)
            .bind(input.day_key)
            .fetch_one(pool)
            .await
    }

    /// Find a session by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wealth_sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All sessions for a user, oldest first.
    ///
    /// The whole history is small (at most one row per elapsed day for
    /// non-debug users), so the gate works over the full list.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Session>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM wealth_sessions WHERE user_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark an audio track as generated for this session.
    ///
    /// Returns the updated row, or `None` if no such session exists.
    pub async fn mark_gamma_generated(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE wealth_sessions SET has_generated_gamma_session = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark this session's audio track as listened to in full.
    pub async fn mark_gamma_completed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE wealth_sessions SET gamma_session_completed = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Move the listed sessions' `created_at` back one whole day (admin
    /// day-skip). `day_key` stays as-is: the epoch moves back in the same
    /// operation, so the day number relative to it is unchanged.
    ///
    /// Returns the number of rows moved.
    pub async fn shift_back_one_day(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "UPDATE wealth_sessions SET
                created_at = created_at - interval '1 day'
             WHERE id = ANY($1)",
        )
        .bind(ids.to_vec())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
