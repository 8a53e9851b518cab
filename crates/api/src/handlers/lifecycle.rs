//! Handlers for lifecycle commands on a project.

use axum::extract::{Path, State};
use axum::Json;
use capworks_core::lifecycle::{self, CommandKind, LifecycleCommand, ProjectStatus};
use capworks_core::project::Project;
use capworks_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Commands the project accepts in its current status.
#[derive(Debug, Serialize)]
pub struct AvailableCommands {
    pub status: ProjectStatus,
    pub commands: Vec<CommandKind>,
}

/// GET /api/v1/projects/{id}/commands
pub async fn available(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AvailableCommands>>> {
    let project = state.store.get(id).await?;
    Ok(Json(DataResponse {
        data: AvailableCommands {
            status: project.status,
            commands: lifecycle::available_commands(project.status),
        },
    }))
}

/// POST /api/v1/projects/{id}/commands
///
/// Runs the lifecycle engine against the stored project and persists the
/// result. A rejected command leaves the stored project untouched.
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(command): Json<LifecycleCommand>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = state.store.get(id).await?;
    let kind = command.kind();

    let updated = lifecycle::apply(&project, &command).inspect_err(|err| {
        tracing::info!(
            project_id = id,
            command = %kind,
            status = project.status.as_str(),
            error = %err,
            "Lifecycle command rejected"
        );
    })?;

    let saved = state.store.update(id, updated).await?;
    tracing::info!(
        project_id = id,
        command = %kind,
        from = project.status.as_str(),
        to = saved.status.as_str(),
        "Lifecycle command applied"
    );
    Ok(Json(DataResponse { data: saved }))
}
