//! Exercise repository for database operations
//!
//! A user's log is the set of exercise rows carrying that user's id; there
//! is no separate reference list to maintain.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: Option<NaiveDate>,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all exercises logged against a user
    ///
    /// Ordered by date ascending with creation time as tiebreaker, so that
    /// downstream truncation is deterministic. Undated rows sort first.
    pub async fn get_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
            ORDER BY date ASC NULLS FIRST, created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
