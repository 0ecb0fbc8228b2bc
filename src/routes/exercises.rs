//! Exercise logging and log retrieval routes

use crate::error::ApiError;
use crate::services::exercise::{ExerciseService, LogExerciseInput, LogFilter};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Form body for logging an exercise
///
/// All fields arrive as strings; `duration` and `date` are parsed here so
/// that malformed values produce the uniform error body instead of a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct LogExerciseParams {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Query parameters for log retrieval
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Response for a logged exercise
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Response for log retrieval
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

/// A single entry in the logs response
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// POST /api/users/:id/exercises - Log an exercise against a user
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<LogExerciseParams>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let user_id = parse_user_id(&id)?;

    let input = LogExerciseInput {
        description: params.description,
        duration: parse_optional(params.duration.as_deref(), parse_duration)?,
        date: parse_optional(params.date.as_deref(), parse_date)?,
    };

    let logged = ExerciseService::log_exercise(state.db(), user_id, input).await?;

    Ok(Json(ExerciseResponse {
        id: logged.user.id.to_string(),
        username: logged.user.username,
        description: logged.description,
        duration: logged.duration,
        date: logged.date,
    }))
}

/// GET /api/users/:id/logs - Retrieve a user's filtered exercise log
pub async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogsResponse>, ApiError> {
    let user_id = parse_user_id(&id)?;
    let filter = parse_filter(&query)?;

    let log = ExerciseService::get_logs(state.db(), user_id, filter).await?;

    Ok(Json(LogsResponse {
        id: log.user.id.to_string(),
        username: log.user.username,
        count: log.count,
        log: log
            .entries
            .into_iter()
            .map(|e| LogEntryResponse {
                description: e.description,
                duration: e.duration,
                date: e.date,
            })
            .collect(),
    }))
}

/// Build a [`LogFilter`] from the raw query strings
fn parse_filter(query: &LogsQuery) -> Result<LogFilter, ApiError> {
    Ok(LogFilter {
        from: parse_optional(query.from.as_deref(), parse_date)?,
        to: parse_optional(query.to.as_deref(), parse_date)?,
        limit: parse_optional(query.limit.as_deref(), parse_limit)?,
    })
}

/// Apply a parser to an optional string, treating blanks as absent
fn parse_optional<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T, ApiError>,
) -> Result<Option<T>, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse)
        .transpose()
}

fn parse_user_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid user id".to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", value)))
}

fn parse_duration(value: &str) -> Result<i32, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::Validation("duration must be a whole number of minutes".to_string()))
}

fn parse_limit(value: &str) -> Result<usize, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::Validation("limit must be a non-negative integer".to_string()))
}
