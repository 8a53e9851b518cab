//! Project row model.

use capworks_core::error::CoreError;
use capworks_core::lifecycle::ProjectStatus;
use capworks_core::project::{License, Project};
use capworks_core::types::{CalendarDate, DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub beneficiary: Option<String>,
    pub manager_name: Option<String>,
    pub team_names: Option<String>,
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    pub cost: f64,
    pub start_date: Option<CalendarDate>,
    pub duration_days: Option<i32>,
    pub planned_end_date: Option<CalendarDate>,
    pub actual_end_date: Option<CalendarDate>,
    pub site_handover_date: Option<CalendarDate>,
    pub contract_signing_date: Option<CalendarDate>,
    pub charter_preparation_date: Option<CalendarDate>,
    pub status_id: StatusId,
    pub suspension_date: Option<CalendarDate>,
    pub suspension_duration_days: Option<i32>,
    pub resumption_date: Option<CalendarDate>,
    pub notes: String,
    pub licenses: Json<Vec<License>>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ProjectRow> for Project {
    type Error = CoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let status = ProjectStatus::from_id(row.status_id).ok_or_else(|| {
            CoreError::Internal(format!(
                "Project {} has unknown status_id {}",
                row.id, row.status_id
            ))
        })?;

        Ok(Project {
            id: row.id,
            name: row.name,
            beneficiary: row.beneficiary,
            manager_name: row.manager_name,
            team_names: row.team_names,
            company_name: row.company_name,
            company_representative: row.company_representative,
            cost: row.cost,
            start_date: row.start_date,
            duration_days: row.duration_days,
            planned_end_date: row.planned_end_date,
            actual_end_date: row.actual_end_date,
            site_handover_date: row.site_handover_date,
            contract_signing_date: row.contract_signing_date,
            charter_preparation_date: row.charter_preparation_date,
            status,
            suspension_date: row.suspension_date,
            suspension_duration_days: row.suspension_duration_days,
            resumption_date: row.resumption_date,
            notes: row.notes,
            licenses: row.licenses.0,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status_id: StatusId) -> ProjectRow {
        let now = chrono::Utc::now();
        ProjectRow {
            id: 7,
            name: "Health centre".to_string(),
            beneficiary: Some("Ministry of Health".to_string()),
            manager_name: None,
            team_names: None,
            company_name: None,
            company_representative: None,
            cost: 12_000.0,
            start_date: CalendarDate::from_ymd_opt(2024, 1, 1),
            duration_days: Some(10),
            planned_end_date: CalendarDate::from_ymd_opt(2024, 1, 11),
            actual_end_date: None,
            site_handover_date: None,
            contract_signing_date: None,
            charter_preparation_date: None,
            status_id,
            suspension_date: None,
            suspension_duration_days: None,
            resumption_date: None,
            notes: String::new(),
            licenses: Json(vec![License {
                number: "B-1024".to_string(),
                name: "Building permit".to_string(),
                ..Default::default()
            }]),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_converts_to_project() {
        let project = Project::try_from(row(3)).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.status, ProjectStatus::Suspended);
        assert_eq!(project.licenses.len(), 1);
        assert_eq!(project.licenses[0].number, "B-1024");
        assert!(project.created_at.is_some());
    }

    #[test]
    fn unknown_status_id_is_an_internal_error() {
        let err = Project::try_from(row(42)).unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
        assert!(err.to_string().contains("status_id 42"));
    }
}
