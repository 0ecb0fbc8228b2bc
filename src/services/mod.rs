//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the HTTP layer.

pub mod exercise;
pub mod user;

pub use exercise::{ExerciseLog, ExerciseService, LogEntry, LogExerciseInput, LogFilter, LoggedExercise};
pub use user::UserService;

use crate::error::ApiError;

/// Presence check for a required field
///
/// HTML forms submit empty strings for fields the user left blank, so blank
/// values count as absent.
pub(crate) fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation(format!("{} is required", name)))
}
