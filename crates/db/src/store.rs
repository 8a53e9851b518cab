//! [`ProjectStore`] backed by PostgreSQL.

use async_trait::async_trait;
use capworks_core::error::CoreError;
use capworks_core::lifecycle::ProjectStatus;
use capworks_core::project::Project;
use capworks_core::store::{ProjectStore, PROJECT_ENTITY};
use capworks_core::types::DbId;

use crate::models::project::ProjectRow;
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Adapts [`ProjectRepo`] to the [`ProjectStore`] trait.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a database failure onto the core error type, logging the detail.
fn db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL check constraint violation.
        if db_err.code().as_deref() == Some("23514") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return CoreError::Validation(format!("Value violates constraint: {constraint}"));
        }
    }
    tracing::error!(error = %err, "Project store database error");
    CoreError::Internal("database error".to_string())
}

fn into_projects(rows: Vec<ProjectRow>) -> Result<Vec<Project>, CoreError> {
    rows.into_iter().map(Project::try_from).collect()
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn get(&self, id: DbId) -> Result<Project, CoreError> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(db_error)?
            .ok_or(CoreError::NotFound {
                entity: PROJECT_ENTITY,
                id,
            })?
            .try_into()
    }

    async fn list(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>, CoreError> {
        let rows = ProjectRepo::list(&self.pool, status.map(ProjectStatus::id))
            .await
            .map_err(db_error)?;
        into_projects(rows)
    }

    async fn create(&self, project: Project) -> Result<Project, CoreError> {
        let row = ProjectRepo::create(&self.pool, &project)
            .await
            .map_err(db_error)?;
        tracing::debug!(project_id = row.id, "Project inserted");
        row.try_into()
    }

    async fn update(&self, id: DbId, project: Project) -> Result<Project, CoreError> {
        ProjectRepo::update(&self.pool, id, &project)
            .await
            .map_err(db_error)?
            .ok_or(CoreError::NotFound {
                entity: PROJECT_ENTITY,
                id,
            })?
            .try_into()
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        ProjectRepo::soft_delete(&self.pool, id)
            .await
            .map_err(db_error)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(db_error)
    }
}
