//! Dashboard handlers.

use axum::extract::{Query, State};
use axum::Json;
use capworks_core::dashboard::{summarize, DashboardSummary};
use capworks_core::types::CalendarDate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /dashboard/summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// Reference date for overdue checks. Defaults to today (UTC).
    pub today: Option<CalendarDate>,
}

/// GET /api/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let today = params
        .today
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let projects = state.store.list(None).await?;
    Ok(Json(DataResponse {
        data: summarize(&projects, today),
    }))
}
