//! Persistence seam for projects.
//!
//! The lifecycle engine and schedule calculator never touch storage; callers
//! load a project through a [`ProjectStore`], run the engine, and hand the
//! result back with [`ProjectStore::update`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::lifecycle::ProjectStatus;
use crate::project::Project;
use crate::types::DbId;

/// Entity name used in [`CoreError::NotFound`].
pub const PROJECT_ENTITY: &str = "Project";

/// CRUD operations over stored projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch a project, or [`CoreError::NotFound`].
    async fn get(&self, id: DbId) -> Result<Project, CoreError>;

    /// List projects, newest first, optionally restricted to one status.
    async fn list(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>, CoreError>;

    /// Persist a new project. The store assigns `id` and timestamps.
    async fn create(&self, project: Project) -> Result<Project, CoreError>;

    /// Replace the stored project `id`, or [`CoreError::NotFound`].
    async fn update(&self, id: DbId, project: Project) -> Result<Project, CoreError>;

    /// Delete a project. Returns `false` if nothing was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: PROJECT_ENTITY,
        id,
    }
}

/// Process-local store used for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    inner: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    projects: BTreeMap<DbId, Project>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn get(&self, id: DbId) -> Result<Project, CoreError> {
        let state = self.inner.read().await;
        state.projects.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>, CoreError> {
        let state = self.inner.read().await;
        Ok(state
            .projects
            .values()
            .rev()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect())
    }

    async fn create(&self, mut project: Project) -> Result<Project, CoreError> {
        let mut state = self.inner.write().await;
        state.last_id += 1;
        let now = chrono::Utc::now();
        project.id = state.last_id;
        project.created_at = Some(now);
        project.updated_at = Some(now);
        state.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: DbId, mut project: Project) -> Result<Project, CoreError> {
        let mut state = self.inner.write().await;
        let existing = state.projects.get_mut(&id).ok_or_else(|| not_found(id))?;
        project.id = id;
        project.created_at = existing.created_at;
        project.updated_at = Some(chrono::Utc::now());
        *existing = project.clone();
        Ok(project)
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let mut state = self.inner.write().await;
        Ok(state.projects.remove(&id).is_some())
    }
}
