//! Project record, license records and the create/update DTOs.
//!
//! This module lives in `core` (zero internal deps) so that both the store
//! implementations and the HTTP layer share one definition of a project.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::lifecycle::ProjectStatus;
use crate::schedule::{Schedule, ScheduleEdit};
use crate::types::{CalendarDate, DbId, Timestamp};

/// A license attached to a project. Plain data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub number: String,
    pub name: String,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    #[serde(default)]
    pub notes: String,
}

/// A capital works project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Assigned by the store on creation; `0` until then.
    #[serde(default)]
    pub id: DbId,
    pub name: String,
    pub beneficiary: Option<String>,
    pub manager_name: Option<String>,
    pub team_names: Option<String>,
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    #[serde(default)]
    pub cost: f64,

    pub start_date: Option<CalendarDate>,
    pub duration_days: Option<i32>,
    pub planned_end_date: Option<CalendarDate>,
    pub actual_end_date: Option<CalendarDate>,
    pub site_handover_date: Option<CalendarDate>,
    pub contract_signing_date: Option<CalendarDate>,
    pub charter_preparation_date: Option<CalendarDate>,

    pub status: ProjectStatus,
    pub suspension_date: Option<CalendarDate>,
    pub suspension_duration_days: Option<i32>,
    pub resumption_date: Option<CalendarDate>,
    /// Append-only log; entries are separated by a blank line.
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub licenses: Vec<License>,

    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Project {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            start_date: self.start_date,
            duration_days: self.duration_days,
            planned_end_date: self.planned_end_date,
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.start_date = schedule.start_date;
        self.duration_days = schedule.duration_days;
        self.planned_end_date = schedule.planned_end_date;
        self
    }

    /// Apply schedule edits through the calculator and reject the result if
    /// the three schedule fields disagree.
    pub fn with_schedule_edits(
        self,
        edits: impl IntoIterator<Item = ScheduleEdit>,
    ) -> Result<Self, CoreError> {
        let schedule = self.schedule().with_edits(edits);
        schedule.validate()?;
        Ok(self.with_schedule(schedule))
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new project. New projects always start in `planning`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    pub beneficiary: Option<String>,
    pub manager_name: Option<String>,
    pub team_names: Option<String>,
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    #[serde(default)]
    pub cost: f64,
    pub start_date: Option<CalendarDate>,
    pub duration_days: Option<i32>,
    pub planned_end_date: Option<CalendarDate>,
    pub site_handover_date: Option<CalendarDate>,
    pub contract_signing_date: Option<CalendarDate>,
    pub charter_preparation_date: Option<CalendarDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub licenses: Vec<License>,
}

impl NewProject {
    /// Validate the input and build the unsaved project record.
    ///
    /// The schedule is run through the calculator in field order (start,
    /// duration, end) so a missing end date is filled in from the other two.
    pub fn into_project(self) -> Result<Project, CoreError> {
        check_valid(&self)?;
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }

        let edits = schedule_edits(
            self.start_date.map(Some),
            self.duration_days.map(Some),
            self.planned_end_date.map(Some),
        );

        let project = Project {
            id: 0,
            name: self.name,
            beneficiary: self.beneficiary,
            manager_name: self.manager_name,
            team_names: self.team_names,
            company_name: self.company_name,
            company_representative: self.company_representative,
            cost: self.cost,
            start_date: None,
            duration_days: None,
            planned_end_date: None,
            actual_end_date: None,
            site_handover_date: self.site_handover_date,
            contract_signing_date: self.contract_signing_date,
            charter_preparation_date: self.charter_preparation_date,
            status: ProjectStatus::Planning,
            suspension_date: None,
            suspension_duration_days: None,
            resumption_date: None,
            notes: self.notes,
            licenses: self.licenses,
            created_at: None,
            updated_at: None,
        };

        project.with_schedule_edits(edits)
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// Status and notes are deliberately absent: status changes only through
/// lifecycle commands and notes are append-only. For the nullable schedule
/// fields, an explicit JSON `null` clears the value while an omitted key
/// leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub beneficiary: Option<String>,
    pub manager_name: Option<String>,
    pub team_names: Option<String>,
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<CalendarDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration_days: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub planned_end_date: Option<Option<CalendarDate>>,
    pub site_handover_date: Option<CalendarDate>,
    pub contract_signing_date: Option<CalendarDate>,
    pub charter_preparation_date: Option<CalendarDate>,
    pub licenses: Option<Vec<License>>,
}

impl ProjectUpdate {
    /// Merge the update into `project`, re-deriving the schedule from the
    /// edited fields only.
    pub fn apply_to(self, mut project: Project) -> Result<Project, CoreError> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(CoreError::Validation("name must not be empty".to_string()));
            }
            project.name = name;
        }
        if let Some(cost) = self.cost {
            if cost < 0.0 || !cost.is_finite() {
                return Err(CoreError::Validation(
                    "cost must not be negative".to_string(),
                ));
            }
            project.cost = cost;
        }
        merge(&mut project.beneficiary, self.beneficiary);
        merge(&mut project.manager_name, self.manager_name);
        merge(&mut project.team_names, self.team_names);
        merge(&mut project.company_name, self.company_name);
        merge(&mut project.company_representative, self.company_representative);
        merge(&mut project.site_handover_date, self.site_handover_date);
        merge(&mut project.contract_signing_date, self.contract_signing_date);
        merge(&mut project.charter_preparation_date, self.charter_preparation_date);
        if let Some(licenses) = self.licenses {
            project.licenses = licenses;
        }

        let edits = schedule_edits(self.start_date, self.duration_days, self.planned_end_date);
        project.with_schedule_edits(edits)
    }
}

fn merge<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

fn schedule_edits(
    start_date: Option<Option<CalendarDate>>,
    duration_days: Option<Option<i32>>,
    planned_end_date: Option<Option<CalendarDate>>,
) -> Vec<ScheduleEdit> {
    let mut edits = Vec::with_capacity(3);
    if let Some(start) = start_date {
        edits.push(ScheduleEdit::StartDate(start));
    }
    if let Some(duration) = duration_days {
        edits.push(ScheduleEdit::DurationDays(duration));
    }
    if let Some(end) = planned_end_date {
        edits.push(ScheduleEdit::PlannedEndDate(end));
    }
    edits
}

/// Distinguish an omitted key (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Flatten `validator` errors into a single [`CoreError::Validation`].
fn check_valid(input: &impl Validate) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    })
}
