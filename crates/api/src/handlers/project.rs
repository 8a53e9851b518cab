//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use capworks_core::error::CoreError;
use capworks_core::lifecycle::ProjectStatus;
use capworks_core::project::{NewProject, Project, ProjectUpdate};
use capworks_core::store::PROJECT_ENTITY;
use capworks_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    pub status: Option<ProjectStatus>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = input.into_project()?;
    let project = state.store.create(project).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = state.store.list(params.status).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = state.store.get(id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
///
/// Schedule fields present in the body are re-derived through the schedule
/// calculator; a body that leaves the schedule inconsistent is rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectUpdate>,
) -> AppResult<Json<DataResponse<Project>>> {
    let existing = state.store.get(id).await?;
    let project = input.apply_to(existing)?;
    let project = state.store.update(id, project).await?;
    tracing::debug!(project_id = id, "Project updated");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: PROJECT_ENTITY,
            id,
        }))
    }
}
