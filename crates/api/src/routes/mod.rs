pub mod health;
pub mod project;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
/// /projects/{id}/commands            available commands, apply command
///
/// /schedule/derive                   schedule calculator (POST)
///
/// /dashboard/summary                 portfolio summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .route("/schedule/derive", post(handlers::schedule::derive))
        .route("/dashboard/summary", get(handlers::dashboard::summary))
}
