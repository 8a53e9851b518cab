//! Schedule calculator endpoint used by project forms while a user edits
//! the start date, duration or planned end date.

use axum::Json;
use capworks_core::schedule::{parse_duration, Schedule, ScheduleEdit};
use capworks_core::types::CalendarDate;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

/// The schedule field the user just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditedField {
    StartDate,
    DurationDays,
    PlannedEndDate,
}

/// Duration as typed into a form: a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(i64),
    Text(String),
}

impl RawDuration {
    /// Anything other than a non-negative integer is treated as absent.
    fn days(&self) -> Option<i32> {
        match self {
            RawDuration::Number(n) => i32::try_from(*n).ok().filter(|d| *d >= 0),
            RawDuration::Text(s) => parse_duration(s),
        }
    }
}

/// Current form values plus the field that changed.
#[derive(Debug, Deserialize)]
pub struct DeriveScheduleRequest {
    pub start_date: Option<CalendarDate>,
    pub duration_days: Option<RawDuration>,
    pub planned_end_date: Option<CalendarDate>,
    pub edited: EditedField,
}

#[derive(Debug, Serialize)]
pub struct DeriveScheduleResponse {
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Set when the three fields still disagree after derivation.
    pub conflict: Option<String>,
}

/// POST /api/v1/schedule/derive
///
/// Never fails on bad duration input: it simply derives nothing.
pub async fn derive(
    Json(input): Json<DeriveScheduleRequest>,
) -> AppResult<Json<DataResponse<DeriveScheduleResponse>>> {
    let current = Schedule {
        start_date: input.start_date,
        duration_days: input.duration_days.as_ref().and_then(RawDuration::days),
        planned_end_date: input.planned_end_date,
    };

    let edit = match input.edited {
        EditedField::StartDate => ScheduleEdit::StartDate(current.start_date),
        EditedField::DurationDays => ScheduleEdit::DurationDays(current.duration_days),
        EditedField::PlannedEndDate => ScheduleEdit::PlannedEndDate(current.planned_end_date),
    };

    let schedule = current.with_edit(edit);
    let conflict = schedule.validate().err().map(|e| e.to_string());

    Ok(Json(DataResponse {
        data: DeriveScheduleResponse { schedule, conflict },
    }))
}
