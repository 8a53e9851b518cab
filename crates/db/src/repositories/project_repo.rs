//! Repository for the `projects` table.

use capworks_core::project::Project;
use capworks_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{ProjectRow, StatusId};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, beneficiary, manager_name, team_names, company_name, \
     company_representative, cost, start_date, duration_days, planned_end_date, \
     actual_end_date, site_handover_date, contract_signing_date, charter_preparation_date, \
     status_id, suspension_date, suspension_duration_days, resumption_date, notes, licenses, \
     deleted_at, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &Project) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                name, beneficiary, manager_name, team_names, company_name,
                company_representative, cost, start_date, duration_days, planned_end_date,
                actual_end_date, site_handover_date, contract_signing_date,
                charter_preparation_date, status_id, suspension_date, suspension_duration_days,
                resumption_date, notes, licenses
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.name)
            .bind(&input.beneficiary)
            .bind(&input.manager_name)
            .bind(&input.team_names)
            .bind(&input.company_name)
            .bind(&input.company_representative)
            .bind(input.cost)
            .bind(input.start_date)
            .bind(input.duration_days)
            .bind(input.planned_end_date)
            .bind(input.actual_end_date)
            .bind(input.site_handover_date)
            .bind(input.contract_signing_date)
            .bind(input.charter_preparation_date)
            .bind(input.status.id())
            .bind(input.suspension_date)
            .bind(input.suspension_duration_days)
            .bind(input.resumption_date)
            .bind(&input.notes)
            .bind(Json(&input.licenses))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by most recently created first, optionally
    /// restricted to one status. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        status_id: Option<StatusId>,
    ) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE deleted_at IS NULL AND ($1::SMALLINT IS NULL OR status_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column of a project.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &Project,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                beneficiary = $3,
                manager_name = $4,
                team_names = $5,
                company_name = $6,
                company_representative = $7,
                cost = $8,
                start_date = $9,
                duration_days = $10,
                planned_end_date = $11,
                actual_end_date = $12,
                site_handover_date = $13,
                contract_signing_date = $14,
                charter_preparation_date = $15,
                status_id = $16,
                suspension_date = $17,
                suspension_duration_days = $18,
                resumption_date = $19,
                notes = $20,
                licenses = $21,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.beneficiary)
            .bind(&input.manager_name)
            .bind(&input.team_names)
            .bind(&input.company_name)
            .bind(&input.company_representative)
            .bind(input.cost)
            .bind(input.start_date)
            .bind(input.duration_days)
            .bind(input.planned_end_date)
            .bind(input.actual_end_date)
            .bind(input.site_handover_date)
            .bind(input.contract_signing_date)
            .bind(input.charter_preparation_date)
            .bind(input.status.id())
            .bind(input.suspension_date)
            .bind(input.suspension_duration_days)
            .bind(input.resumption_date)
            .bind(&input.notes)
            .bind(Json(&input.licenses))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a project by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
