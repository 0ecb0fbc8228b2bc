//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod exercise;
pub mod user;

pub use exercise::{CreateExercise, ExerciseRecord, ExerciseRepository};
pub use user::{UserRecord, UserRepository};
