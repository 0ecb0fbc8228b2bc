//! User API routes

use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, Form, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form body for user creation
#[derive(Debug, Deserialize)]
pub struct CreateUserParams {
    pub username: Option<String>,
}

/// Response for user creation
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: String,
    pub username: String,
}

/// Full user record as returned by the listing endpoint
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/users - Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Form(params): Form<CreateUserParams>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let user = UserService::create_user(state.db(), params.username.as_deref()).await?;

    Ok(Json(CreateUserResponse {
        id: user.id.to_string(),
        username: user.username,
    }))
}

/// GET /api/users - List every user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list_users(state.db()).await?;

    let response: Vec<UserResponse> = users
        .into_iter()
        .map(|u| UserResponse {
            id: u.id.to_string(),
            username: u.username,
            created_at: u.created_at,
        })
        .collect();

    Ok(Json(response))
}
