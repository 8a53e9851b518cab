//! Schedule derivation: keeps start date, duration and planned end date in
//! step while a user edits any one of them.
//!
//! Two derivations exist and each writes exactly one field:
//!
//! - start + duration  -> planned end date
//! - start + end date  -> duration (only when the end strictly follows the start)
//!
//! Neither derivation ever rewrites the field that was just edited, so the
//! pair cannot feed back into each other.

use serde::{Deserialize, Serialize};

use crate::dates::{add_days, days_between};
use crate::error::LifecycleError;
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Pure derivations
// ---------------------------------------------------------------------------

/// Derive the planned end date from a start date and a duration.
///
/// Returns `None` ("leave the end date alone") when either input is absent,
/// the duration is negative, or the result would overflow the date range.
pub fn on_start_or_duration_changed(
    start_date: Option<CalendarDate>,
    duration_days: Option<i32>,
) -> Option<CalendarDate> {
    add_days(start_date?, duration_days?)
}

/// Derive the duration from a start date and a planned end date.
///
/// Returns `None` ("leave the duration alone") when either input is absent or
/// when the end date does not strictly follow the start date.
pub fn on_start_or_end_changed(
    start_date: Option<CalendarDate>,
    planned_end_date: Option<CalendarDate>,
) -> Option<i32> {
    let days = days_between(start_date?, planned_end_date?);
    if days <= 0 {
        return None;
    }
    i32::try_from(days).ok()
}

/// Parse raw duration input from a form field.
///
/// Anything that is not a non-negative integer counts as absent.
pub fn parse_duration(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|d| *d >= 0)
}

// ---------------------------------------------------------------------------
// Editing session
// ---------------------------------------------------------------------------

/// The invariant-bearing subset of a project's dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_date: Option<CalendarDate>,
    pub duration_days: Option<i32>,
    pub planned_end_date: Option<CalendarDate>,
}

/// A single user edit to one schedule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ScheduleEdit {
    StartDate(Option<CalendarDate>),
    DurationDays(Option<i32>),
    PlannedEndDate(Option<CalendarDate>),
}

impl Schedule {
    /// Apply one edit plus the derivation it triggers, returning the new
    /// schedule.
    ///
    /// A start-date edit treats start + duration as the driving pair when a
    /// duration exists; otherwise it derives the duration from an existing
    /// end date.
    pub fn with_edit(mut self, edit: ScheduleEdit) -> Self {
        match edit {
            ScheduleEdit::StartDate(start) => {
                self.start_date = start;
                if self.duration_days.is_some() {
                    if let Some(end) =
                        on_start_or_duration_changed(self.start_date, self.duration_days)
                    {
                        self.planned_end_date = Some(end);
                    }
                } else if let Some(days) =
                    on_start_or_end_changed(self.start_date, self.planned_end_date)
                {
                    self.duration_days = Some(days);
                }
            }
            ScheduleEdit::DurationDays(duration) => {
                self.duration_days = duration.filter(|d| *d >= 0);
                if let Some(end) = on_start_or_duration_changed(self.start_date, self.duration_days)
                {
                    self.planned_end_date = Some(end);
                }
            }
            ScheduleEdit::PlannedEndDate(end) => {
                self.planned_end_date = end;
                if let Some(days) = on_start_or_end_changed(self.start_date, self.planned_end_date) {
                    self.duration_days = Some(days);
                }
            }
        }
        self
    }

    /// Apply several edits in order.
    pub fn with_edits(self, edits: impl IntoIterator<Item = ScheduleEdit>) -> Self {
        edits.into_iter().fold(self, Schedule::with_edit)
    }

    /// Check that the three fields agree with each other.
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if let Some(days) = self.duration_days {
            if days < 0 {
                return Err(LifecycleError::invalid(
                    "duration_days",
                    "must be a non-negative number of days",
                ));
            }
        }

        let (Some(start), Some(end)) = (self.start_date, self.planned_end_date) else {
            return Ok(());
        };

        match self.duration_days {
            Some(days) if add_days(start, days) != Some(end) => Err(LifecycleError::invalid(
                "planned_end_date",
                format!("must equal start_date plus {days} days"),
            )),
            None if end < start => Err(LifecycleError::invalid(
                "planned_end_date",
                "must not precede start_date",
            )),
            _ => Ok(()),
        }
    }
}
