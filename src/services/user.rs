//! User service for user creation and listing

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use crate::services::require_field;
use sqlx::PgPool;

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create a new user
    ///
    /// `username` is the only required field; a fresh id is assigned and the
    /// user starts with an empty exercise log.
    pub async fn create_user(
        pool: &PgPool,
        username: Option<&str>,
    ) -> Result<UserRecord, ApiError> {
        let username = require_field(username, "username")?;

        let user = UserRepository::create(pool, username)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user)
    }

    /// List every user record, unfiltered, in store order
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRecord>, ApiError> {
        UserRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)
    }
}
