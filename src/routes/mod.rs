//! Route definitions for the Exercise Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

mod exercises;
mod health;
mod users;

pub use exercises::{get_logs, log_exercise};
pub use users::{create_user, list_users};

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/:id/exercises", post(exercises::log_exercise))
        .route("/users/:id/logs", get(exercises::get_logs))
}

/// GET / - Static landing page with forms for the two POST endpoints
async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Exercise Tracker</title>
</head>
<body>
  <h1>Exercise Tracker</h1>

  <form action="/api/users" method="post">
    <h2>Create a New User</h2>
    <p><code>POST /api/users</code></p>
    <input name="username" placeholder="username">
    <input type="submit" value="Submit">
  </form>

  <form id="exercise-form" method="post">
    <h2>Add exercises</h2>
    <p><code>POST /api/users/:id/exercises</code></p>
    <input name="id" id="user-id" placeholder="user id">
    <input name="description" placeholder="description">
    <input name="duration" placeholder="duration (mins.)">
    <input name="date" placeholder="date (yyyy-mm-dd)">
    <input type="submit" value="Submit">
  </form>

  <p>
    <strong>GET a user's exercise log:</strong>
    <code>/api/users/:id/logs?[from][&amp;to][&amp;limit]</code>
  </p>

  <script>
    const form = document.getElementById('exercise-form');
    form.addEventListener('submit', () => {
      const id = document.getElementById('user-id').value;
      form.action = '/api/users/' + id + '/exercises';
    });
  </script>
</body>
</html>
"#;
