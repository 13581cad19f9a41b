pub mod admin;
pub mod neural;
pub mod sessions;
pub mod users;

use neurowealth_core::error::CoreError;
use neurowealth_core::types::DbId;
use neurowealth_db::models::user::User;
use neurowealth_db::repositories::UserRepo;
use neurowealth_db::DbPool;

use crate::error::{AppError, AppResult};

/// Fetch a user or fail with 404. Every per-user operation starts here.
pub(crate) async fn load_user(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}
