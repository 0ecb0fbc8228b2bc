//! Exercise service
//!
//! Provides business logic for exercise tracking:
//! - Logging exercises against a user
//! - Filtering and shaping a user's exercise log (date range + limit)
//! - Calendar-date rendering of exercise dates

use crate::error::ApiError;
use crate::repositories::{
    CreateExercise, ExerciseRecord, ExerciseRepository, UserRecord, UserRepository,
};
use crate::services::require_field;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Input for logging an exercise
#[derive(Debug, Clone, Default)]
pub struct LogExerciseInput {
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub date: Option<NaiveDate>,
}

/// Optional bounds applied to a user's exercise log
///
/// Both date bounds are inclusive. `limit` caps the number of entries kept
/// from the start of the filtered sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Whether an exercise dated `date` falls within the bounds
    ///
    /// An undated exercise only matches when no bound is given.
    pub fn matches(&self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(d) => {
                self.from.map_or(true, |from| d >= from) && self.to.map_or(true, |to| d <= to)
            }
            None => self.from.is_none() && self.to.is_none(),
        }
    }
}

/// A single shaped log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// A user's exercise log after filtering and shaping
///
/// `count` is the size of the full, unfiltered log; `entries` is the
/// filtered and truncated view.
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: UserRecord,
    pub count: usize,
    pub entries: Vec<LogEntry>,
}

/// A newly logged exercise together with its owning user
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: UserRecord,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Render a calendar date the way `Date.toDateString` does
///
/// An absent date renders as the current date at render time.
pub fn render_date(date: Option<NaiveDate>) -> String {
    date.unwrap_or_else(|| Utc::now().date_naive())
        .format("%a %b %d %Y")
        .to_string()
}

/// Filter a user's exercises by the given bounds, truncate to the limit,
/// and project each survivor to a shaped log entry
pub fn shape_log(records: &[ExerciseRecord], filter: &LogFilter) -> Vec<LogEntry> {
    let entries = records
        .iter()
        .filter(|record| filter.matches(record.date))
        .map(|record| LogEntry {
            description: record.description.clone(),
            duration: record.duration,
            date: render_date(record.date),
        });

    match filter.limit {
        Some(limit) => entries.take(limit).collect(),
        None => entries.collect(),
    }
}

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise against a user
    ///
    /// Fails with `NotFound` when the user id does not resolve and with
    /// `Validation` when `description` or `duration` is missing. An omitted
    /// `date` defaults to the current calendar date.
    pub async fn log_exercise(
        pool: &PgPool,
        user_id: Uuid,
        input: LogExerciseInput,
    ) -> Result<LoggedExercise, ApiError> {
        let user = UserRepository::get_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let description = require_field(input.description.as_deref(), "description")?.to_string();
        let duration = input
            .duration
            .ok_or_else(|| ApiError::Validation("duration is required".to_string()))?;

        let date = input.date.unwrap_or_else(|| Utc::now().date_naive());

        let exercise = ExerciseRepository::create(
            pool,
            CreateExercise {
                user_id: user.id,
                description,
                duration,
                date: Some(date),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(LoggedExercise {
            user,
            description: exercise.description,
            duration: exercise.duration,
            date: render_date(exercise.date),
        })
    }

    /// Retrieve a user's exercise log, filtered and shaped
    ///
    /// `count` reflects the full log regardless of the filter applied to
    /// the entries.
    pub async fn get_logs(
        pool: &PgPool,
        user_id: Uuid,
        filter: LogFilter,
    ) -> Result<ExerciseLog, ApiError> {
        let user = UserRepository::get_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let records = ExerciseRepository::get_all_for_user(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        let count = records.len();
        let entries = shape_log(&records, &filter);

        Ok(ExerciseLog {
            user,
            count,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use proptest::prelude::*;
    use rstest::rstest;

    fn record(description: &str, duration: i32, date: Option<&str>) -> ExerciseRecord {
        ExerciseRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: description.to_string(),
            duration,
            date: date.map(|d| d.parse().unwrap()),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("2023-01-05", "Thu Jan 05 2023")]
    #[case("2023-12-31", "Sun Dec 31 2023")]
    #[case("2024-02-29", "Thu Feb 29 2024")]
    #[case("1999-07-04", "Sun Jul 04 1999")]
    fn test_render_date(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render_date(Some(date(input))), expected);
    }

    #[test]
    fn test_render_date_absent_uses_today() {
        let today = Utc::now().date_naive();
        assert_eq!(render_date(None), render_date(Some(today)));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = LogFilter {
            from: Some(date("2023-01-01")),
            to: Some(date("2023-01-31")),
            limit: None,
        };

        assert!(filter.matches(Some(date("2023-01-01"))));
        assert!(filter.matches(Some(date("2023-01-31"))));
        assert!(filter.matches(Some(date("2023-01-15"))));
        assert!(!filter.matches(Some(date("2022-12-31"))));
        assert!(!filter.matches(Some(date("2023-02-01"))));
    }

    #[test]
    fn test_filter_single_bound() {
        let from_only = LogFilter {
            from: Some(date("2023-02-01")),
            ..Default::default()
        };
        assert!(from_only.matches(Some(date("2023-02-01"))));
        assert!(!from_only.matches(Some(date("2023-01-05"))));

        let to_only = LogFilter {
            to: Some(date("2023-01-05")),
            ..Default::default()
        };
        assert!(to_only.matches(Some(date("2023-01-05"))));
        assert!(!to_only.matches(Some(date("2023-01-06"))));
    }

    #[test]
    fn test_filter_undated_only_matches_without_bounds() {
        assert!(LogFilter::default().matches(None));

        let bounded = LogFilter {
            from: Some(date("2023-01-01")),
            ..Default::default()
        };
        assert!(!bounded.matches(None));
    }

    #[test]
    fn test_shape_log_projects_entries() {
        let records = vec![record("run", 30, Some("2023-01-05"))];
        let entries = shape_log(&records, &LogFilter::default());

        assert_eq!(
            entries,
            vec![LogEntry {
                description: "run".to_string(),
                duration: 30,
                date: "Thu Jan 05 2023".to_string(),
            }]
        );
    }

    #[test]
    fn test_shape_log_filters_then_truncates() {
        let records = vec![
            record("swim", 20, Some("2022-12-20")),
            record("run", 30, Some("2023-01-05")),
            record("lift", 45, Some("2023-01-10")),
            record("row", 25, Some("2023-01-20")),
            record("walk", 60, Some("2023-02-02")),
        ];
        let filter = LogFilter {
            from: Some(date("2023-01-01")),
            to: Some(date("2023-01-31")),
            limit: Some(2),
        };

        let entries = shape_log(&records, &filter);

        // Limit applies after filtering, keeping the start of the sequence
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "run");
        assert_eq!(entries[1].description, "lift");
    }

    #[test]
    fn test_shape_log_limit_zero_yields_nothing() {
        let records = vec![record("run", 30, Some("2023-01-05"))];
        let filter = LogFilter {
            limit: Some(0),
            ..Default::default()
        };
        assert!(shape_log(&records, &filter).is_empty());
    }

    #[test]
    fn test_shape_log_excluding_filter_yields_empty() {
        let records = vec![record("run", 30, Some("2023-01-05"))];
        let filter = LogFilter {
            from: Some(date("2023-02-01")),
            ..Default::default()
        };
        assert!(shape_log(&records, &filter).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The shaped log never exceeds the requested limit
        #[test]
        fn prop_limit_bounds_entry_count(
            days in prop::collection::vec(0i64..3650, 0..50),
            limit in 0usize..60
        ) {
            let base = date("2015-01-01");
            let records: Vec<ExerciseRecord> = days
                .iter()
                .map(|d| {
                    let day = (base + chrono::Days::new(*d as u64)).to_string();
                    record("x", 10, Some(day.as_str()))
                })
                .collect();

            let filter = LogFilter { limit: Some(limit), ..Default::default() };
            let entries = shape_log(&records, &filter);

            prop_assert!(entries.len() <= limit);
            prop_assert!(entries.len() == records.len().min(limit));
        }

        /// Every retained entry falls within the inclusive bounds
        #[test]
        fn prop_retained_entries_within_bounds(
            days in prop::collection::vec(0i64..3650, 0..50),
            from_day in 0i64..3650,
            span in 0i64..3650
        ) {
            let base = date("2015-01-01");
            let from = base + chrono::Days::new(from_day as u64);
            let to = from + chrono::Days::new(span as u64);
            let records: Vec<ExerciseRecord> = days
                .iter()
                .map(|d| {
                    let day = (base + chrono::Days::new(*d as u64)).to_string();
                    record("x", 10, Some(day.as_str()))
                })
                .collect();

            let filter = LogFilter { from: Some(from), to: Some(to), limit: None };
            let entries = shape_log(&records, &filter);

            let expected = days
                .iter()
                .map(|d| base + chrono::Days::new(*d as u64))
                .filter(|d| *d >= from && *d <= to)
                .count();
            prop_assert_eq!(entries.len(), expected);
        }
    }
}
