//! Repository for the `users` table.

use sqlx::PgPool;

use neurowealth_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, first_access_date, current_streak, longest_streak, \
                        is_debug, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, first_access_date, is_debug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(input.first_access_date)
            .bind(input.is_debug)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update both streak counters in one round trip.
    pub async fn update_streaks(
        pool: &PgPool,
        id: DbId,
        current_streak: i32,
        longest_streak: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                current_streak = $2,
                longest_streak = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(current_streak)
        .bind(longest_streak)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite `first_access_date` (admin day-skip only).
    ///
    /// Returns the updated row, or `None` if no such user exists.
    pub async fn set_first_access_date(
        pool: &PgPool,
        id: DbId,
        first_access_date: Timestamp,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET first_access_date = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(first_access_date)
            .fetch_optional(pool)
            .await
    }
}
