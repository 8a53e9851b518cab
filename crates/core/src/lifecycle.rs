//! Project lifecycle state machine.
//!
//! Every command is checked against one transition table before any
//! parameter is looked at, and parameters are fully validated before the
//! project is touched. A successful command returns a new project record
//! carrying the new status, the changed dates and one appended audit block;
//! the input record is never modified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::audit_note::{append_entry, AuditEntry};
use crate::dates::add_days;
use crate::error::LifecycleError;
use crate::project::Project;
use crate::schedule::{on_start_or_end_changed, ScheduleEdit};
use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Project lifecycle status.
///
/// Discriminants match the `project_statuses` seed data (1-based SMALLINT).
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning = 1,
    InProgress = 2,
    Suspended = 3,
    Completed = 4,
    Cancelled = 5,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Suspended,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    /// Return the database status ID.
    pub fn id(self) -> i16 {
        self as i16
    }

    /// Look up a status by its database ID.
    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// The snake_case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Suspended => "suspended",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Completed and cancelled projects accept no further commands.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            other => other.as_str(),
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// The kind of a lifecycle command, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Start,
    Suspend,
    Resume,
    Extend,
    Cancel,
    Complete,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Start,
        CommandKind::Suspend,
        CommandKind::Resume,
        CommandKind::Extend,
        CommandKind::Cancel,
        CommandKind::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Suspend => "suspend",
            Self::Resume => "resume",
            Self::Extend => "extend",
            Self::Cancel => "cancel",
            Self::Complete => "complete",
        }
    }

    /// Title used for the command's audit block.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Start => "Project start",
            Self::Suspend => "Suspension",
            Self::Resume => "Resumption",
            Self::Extend => "Extension",
            Self::Cancel => "Cancellation",
            Self::Complete => "Completion",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartParams {
    pub start_date: Option<CalendarDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspendParams {
    pub suspension_date: Option<CalendarDate>,
    pub suspension_duration_days: Option<i32>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeParams {
    pub resumption_date: Option<CalendarDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendParams {
    pub extension_days: Option<i32>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelParams {
    pub cancellation_date: Option<CalendarDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteParams {
    pub completion_date: Option<CalendarDate>,
    pub reason: Option<String>,
}

/// A lifecycle command with its (not yet validated) parameters.
///
/// Serialized as JSON with an internally-tagged `"command"` discriminator,
/// e.g. `{"command": "extend", "extension_days": 5, "reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LifecycleCommand {
    Start(StartParams),
    Suspend(SuspendParams),
    Resume(ResumeParams),
    Extend(ExtendParams),
    Cancel(CancelParams),
    Complete(CompleteParams),
}

impl LifecycleCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Start(_) => CommandKind::Start,
            Self::Suspend(_) => CommandKind::Suspend,
            Self::Resume(_) => CommandKind::Resume,
            Self::Extend(_) => CommandKind::Extend,
            Self::Cancel(_) => CommandKind::Cancel,
            Self::Complete(_) => CommandKind::Complete,
        }
    }
}

// ---------------------------------------------------------------------------
// Transition table
// ---------------------------------------------------------------------------

/// Statuses from which `kind` may be applied.
pub fn allowed_statuses(kind: CommandKind) -> &'static [ProjectStatus] {
    use ProjectStatus::*;
    match kind {
        CommandKind::Start => &[Planning],
        CommandKind::Suspend => &[Planning, InProgress],
        CommandKind::Resume => &[Suspended],
        CommandKind::Extend | CommandKind::Cancel => &[Planning, InProgress, Suspended],
        CommandKind::Complete => &[InProgress],
    }
}

/// Check `kind` against `current` and return the status it leads to.
pub fn transition(
    kind: CommandKind,
    current: ProjectStatus,
) -> Result<ProjectStatus, LifecycleError> {
    if !allowed_statuses(kind).contains(&current) {
        return Err(LifecycleError::IllegalTransition {
            command: kind,
            status: current,
        });
    }
    Ok(match kind {
        CommandKind::Start | CommandKind::Resume => ProjectStatus::InProgress,
        CommandKind::Suspend => ProjectStatus::Suspended,
        CommandKind::Extend => current,
        CommandKind::Cancel => ProjectStatus::Cancelled,
        CommandKind::Complete => ProjectStatus::Completed,
    })
}

/// Commands a project in `status` currently accepts.
pub fn available_commands(status: ProjectStatus) -> Vec<CommandKind> {
    CommandKind::ALL
        .into_iter()
        .filter(|kind| allowed_statuses(*kind).contains(&status))
        .collect()
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Validate and apply `command` to `project`.
///
/// On failure nothing has changed; on success the returned record has the
/// new status and exactly one new audit block at the end of its notes.
pub fn apply(project: &Project, command: &LifecycleCommand) -> Result<Project, LifecycleError> {
    let kind = command.kind();
    let next_status = transition(kind, project.status)?;
    let entry = AuditEntry::new(kind.display_name());

    let (mut updated, entry) = match command {
        LifecycleCommand::Start(params) => {
            let start_date = required(params.start_date, "start_date")?;
            let schedule = project
                .schedule()
                .with_edit(ScheduleEdit::StartDate(Some(start_date)));
            schedule.validate()?;

            let entry = entry
                .date("Start date", start_date)
                .optional_text("Reason", params.reason.as_deref());
            (project.clone().with_schedule(schedule), entry)
        }
        LifecycleCommand::Suspend(params) => {
            let suspension_date = required(params.suspension_date, "suspension_date")?;
            let duration = positive_days(
                params.suspension_duration_days,
                "suspension_duration_days",
            )?;
            let reason = required_text(params.reason.as_deref(), "reason")?;

            let mut updated = project.clone();
            updated.suspension_date = Some(suspension_date);
            updated.suspension_duration_days = Some(duration);

            let entry = entry
                .date("Suspension date", suspension_date)
                .days("Suspension duration", duration)
                .text("Reason", reason);
            (updated, entry)
        }
        LifecycleCommand::Resume(params) => {
            let resumption_date = required(params.resumption_date, "resumption_date")?;
            let reason = required_text(params.reason.as_deref(), "reason")?;

            let mut updated = project.clone();
            updated.resumption_date = Some(resumption_date);

            let entry = entry
                .date("Resumption date", resumption_date)
                .text("Reason", reason);
            (updated, entry)
        }
        LifecycleCommand::Extend(params) => {
            let days = positive_days(params.extension_days, "extension_days")?;
            let reason = required_text(params.reason.as_deref(), "reason")?;
            let baseline = project.planned_end_date.ok_or_else(|| {
                LifecycleError::invalid("planned_end_date", "no baseline end date to extend")
            })?;
            project.schedule().validate()?;
            let new_end = add_days(baseline, days).ok_or_else(|| {
                LifecycleError::invalid("extension_days", "pushes the end date out of range")
            })?;
            let new_duration = match project.duration_days {
                Some(current) => Some(current.checked_add(days).ok_or_else(|| {
                    LifecycleError::invalid("extension_days", "duration would overflow")
                })?),
                None => on_start_or_end_changed(project.start_date, Some(new_end)),
            };

            let mut updated = project.clone();
            updated.duration_days = new_duration;
            updated.planned_end_date = Some(new_end);

            let entry = entry.days("Extension", days).text("Reason", reason);
            (updated, entry)
        }
        LifecycleCommand::Cancel(params) => {
            let cancellation_date = required(params.cancellation_date, "cancellation_date")?;
            let reason = required_text(params.reason.as_deref(), "reason")?;

            let mut updated = project.clone();
            updated.actual_end_date = Some(cancellation_date);

            let entry = entry
                .date("Cancellation date", cancellation_date)
                .text("Reason", reason);
            (updated, entry)
        }
        LifecycleCommand::Complete(params) => {
            let completion_date = required(params.completion_date, "completion_date")?;
            if project.start_date.is_some_and(|start| completion_date < start) {
                return Err(LifecycleError::invalid(
                    "completion_date",
                    "must not precede start_date",
                ));
            }

            let mut updated = project.clone();
            updated.actual_end_date = Some(completion_date);

            let entry = entry
                .date("Completion date", completion_date)
                .optional_text("Reason", params.reason.as_deref());
            (updated, entry)
        }
    };

    updated.status = next_status;
    updated.notes = append_entry(&project.notes, &entry);
    Ok(updated)
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, LifecycleError> {
    value.ok_or(LifecycleError::MissingField { field })
}

fn required_text<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, LifecycleError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(LifecycleError::MissingField { field })
}

fn positive_days(value: Option<i32>, field: &'static str) -> Result<i32, LifecycleError> {
    let days = required(value, field)?;
    if days <= 0 {
        return Err(LifecycleError::invalid(field, "must be greater than zero"));
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::audit_note::count_entries;
    use crate::project::NewProject;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planning_project() -> Project {
        NewProject {
            name: "Primary school annex".to_string(),
            cost: 250_000.0,
            start_date: Some(date(2024, 1, 31)),
            duration_days: Some(30),
            ..Default::default()
        }
        .into_project()
        .unwrap()
    }

    fn with_status(status: ProjectStatus) -> Project {
        Project {
            status,
            ..planning_project()
        }
    }

    fn suspend(days: i32, reason: &str) -> LifecycleCommand {
        LifecycleCommand::Suspend(SuspendParams {
            suspension_date: Some(date(2024, 2, 10)),
            suspension_duration_days: Some(days),
            reason: Some(reason.to_string()),
        })
    }

    fn resume() -> LifecycleCommand {
        LifecycleCommand::Resume(ResumeParams {
            resumption_date: Some(date(2024, 2, 20)),
            reason: Some("weather cleared".to_string()),
        })
    }

    fn extend(days: i32) -> LifecycleCommand {
        LifecycleCommand::Extend(ExtendParams {
            extension_days: Some(days),
            reason: Some("additional scope".to_string()),
        })
    }

    fn cancel() -> LifecycleCommand {
        LifecycleCommand::Cancel(CancelParams {
            cancellation_date: Some(date(2024, 2, 15)),
            reason: Some("funding withdrawn".to_string()),
        })
    }

    // -----------------------------------------------------------------------
    // Transition table
    // -----------------------------------------------------------------------

    #[test]
    fn planning_accepts_start_suspend_extend_cancel() {
        assert_eq!(
            available_commands(ProjectStatus::Planning),
            vec![
                CommandKind::Start,
                CommandKind::Suspend,
                CommandKind::Extend,
                CommandKind::Cancel
            ]
        );
    }

    #[test]
    fn suspended_accepts_resume_extend_cancel() {
        assert_eq!(
            available_commands(ProjectStatus::Suspended),
            vec![CommandKind::Resume, CommandKind::Extend, CommandKind::Cancel]
        );
    }

    #[test]
    fn terminal_statuses_accept_nothing() {
        assert!(available_commands(ProjectStatus::Completed).is_empty());
        assert!(available_commands(ProjectStatus::Cancelled).is_empty());
    }

    #[test]
    fn transition_targets() {
        use ProjectStatus::*;
        assert_eq!(transition(CommandKind::Start, Planning), Ok(InProgress));
        assert_eq!(transition(CommandKind::Suspend, InProgress), Ok(Suspended));
        assert_eq!(transition(CommandKind::Resume, Suspended), Ok(InProgress));
        assert_eq!(transition(CommandKind::Extend, Suspended), Ok(Suspended));
        assert_eq!(transition(CommandKind::Cancel, Planning), Ok(Cancelled));
        assert_eq!(transition(CommandKind::Complete, InProgress), Ok(Completed));
    }

    #[test]
    fn suspend_while_suspended_is_illegal() {
        assert_matches!(
            transition(CommandKind::Suspend, ProjectStatus::Suspended),
            Err(LifecycleError::IllegalTransition {
                command: CommandKind::Suspend,
                status: ProjectStatus::Suspended
            })
        );
    }

    #[test]
    fn illegal_transition_message_is_readable() {
        let err = transition(CommandKind::Resume, ProjectStatus::InProgress).unwrap_err();
        assert_eq!(err.to_string(), "Cannot resume a project that is in progress");
    }

    // -----------------------------------------------------------------------
    // Suspend
    // -----------------------------------------------------------------------

    #[test]
    fn suspend_planning_project() {
        let project = planning_project();
        let updated = apply(&project, &suspend(10, "weather")).unwrap();

        assert_eq!(updated.status, ProjectStatus::Suspended);
        assert_eq!(updated.suspension_duration_days, Some(10));
        assert_eq!(updated.suspension_date, Some(date(2024, 2, 10)));
        assert!(updated.notes.contains("weather"));
        assert_eq!(
            updated.notes,
            "Suspension:\nSuspension date: 2024-02-10\nSuspension duration: 10 days\nReason: weather"
        );
    }

    #[test]
    fn suspend_leaves_input_untouched() {
        let project = planning_project();
        let before = project.clone();
        let _ = apply(&project, &suspend(10, "weather")).unwrap();
        assert_eq!(project, before);
    }

    #[test]
    fn suspend_requires_reason() {
        let err = apply(&planning_project(), &suspend(10, "   ")).unwrap_err();
        assert_eq!(err, LifecycleError::MissingField { field: "reason" });
    }

    #[test]
    fn suspend_requires_positive_duration() {
        let err = apply(&planning_project(), &suspend(0, "weather")).unwrap_err();
        assert_matches!(
            err,
            LifecycleError::InvalidValue {
                field: "suspension_duration_days",
                ..
            }
        );
    }

    #[test]
    fn suspend_requires_date() {
        let command = LifecycleCommand::Suspend(SuspendParams {
            suspension_date: None,
            suspension_duration_days: Some(3),
            reason: Some("strike".to_string()),
        });
        let err = apply(&planning_project(), &command).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::MissingField {
                field: "suspension_date"
            }
        );
    }

    #[test]
    fn missing_fields_are_reported_in_documented_order() {
        let command = LifecycleCommand::Suspend(SuspendParams::default());
        let err = apply(&planning_project(), &command).unwrap_err();
        assert_eq!(err.field(), Some("suspension_date"));
    }

    // -----------------------------------------------------------------------
    // Resume
    // -----------------------------------------------------------------------

    #[test]
    fn resume_suspended_project() {
        let suspended = apply(&planning_project(), &suspend(10, "weather")).unwrap();
        let resumed = apply(&suspended, &resume()).unwrap();

        assert_eq!(resumed.status, ProjectStatus::InProgress);
        assert_eq!(resumed.resumption_date, Some(date(2024, 2, 20)));
        assert_eq!(resumed.suspension_duration_days, Some(10));
        assert!(resumed.notes.starts_with(&suspended.notes));
        assert!(resumed.notes.ends_with("Reason: weather cleared"));
    }

    #[test]
    fn resume_planning_project_is_illegal() {
        let err = apply(&planning_project(), &resume()).unwrap_err();
        assert_matches!(err, LifecycleError::IllegalTransition { .. });
    }

    #[test]
    fn illegal_transition_is_checked_before_params() {
        let command = LifecycleCommand::Resume(ResumeParams::default());
        let err = apply(&planning_project(), &command).unwrap_err();
        assert_matches!(err, LifecycleError::IllegalTransition { .. });
    }

    // -----------------------------------------------------------------------
    // Extend
    // -----------------------------------------------------------------------

    #[test]
    fn extend_moves_duration_and_end_date() {
        let project = planning_project();
        assert_eq!(project.duration_days, Some(30));
        assert_eq!(project.planned_end_date, Some(date(2024, 3, 1)));

        let extended = apply(&project, &extend(5)).unwrap();
        assert_eq!(extended.duration_days, Some(35));
        assert_eq!(extended.planned_end_date, Some(date(2024, 3, 6)));
        assert_eq!(extended.status, ProjectStatus::Planning);
        assert!(extended.schedule().validate().is_ok());
        assert!(extended.notes.contains("Extension: 5 days"));
    }

    #[test]
    fn extend_keeps_suspended_status() {
        let suspended = apply(&planning_project(), &suspend(10, "weather")).unwrap();
        let extended = apply(&suspended, &extend(10)).unwrap();
        assert_eq!(extended.status, ProjectStatus::Suspended);
    }

    #[test]
    fn extend_without_baseline_end_date_fails() {
        let project = Project {
            start_date: None,
            duration_days: None,
            planned_end_date: None,
            ..planning_project()
        };
        let err = apply(&project, &extend(5)).unwrap_err();
        assert_matches!(
            err,
            LifecycleError::InvalidValue {
                field: "planned_end_date",
                ..
            }
        );
    }

    #[test]
    fn extend_rejects_drifted_schedule() {
        let project = Project {
            start_date: Some(date(2024, 1, 1)),
            duration_days: Some(30),
            planned_end_date: Some(date(2024, 3, 1)),
            ..planning_project()
        };
        let err = apply(&project, &extend(5)).unwrap_err();
        assert_matches!(
            err,
            LifecycleError::InvalidValue {
                field: "planned_end_date",
                ..
            }
        );
    }

    #[test]
    fn extend_without_duration_derives_it() {
        let project = Project {
            duration_days: None,
            ..planning_project()
        };
        let extended = apply(&project, &extend(5)).unwrap();
        assert_eq!(extended.duration_days, Some(35));
    }

    #[test]
    fn extend_rejects_non_positive_days() {
        for days in [0, -4] {
            let err = apply(&planning_project(), &extend(days)).unwrap_err();
            assert_eq!(err.field(), Some("extension_days"));
        }
    }

    // -----------------------------------------------------------------------
    // Cancel
    // -----------------------------------------------------------------------

    #[test]
    fn cancel_sets_actual_end_date() {
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::Suspended,
        ] {
            let cancelled = apply(&with_status(status), &cancel()).unwrap();
            assert_eq!(cancelled.status, ProjectStatus::Cancelled);
            assert_eq!(cancelled.actual_end_date, Some(date(2024, 2, 15)));
        }
    }

    #[test]
    fn cancelled_project_cannot_be_suspended() {
        let cancelled = apply(&planning_project(), &cancel()).unwrap();
        let err = apply(&cancelled, &suspend(10, "weather")).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::IllegalTransition {
                command: CommandKind::Suspend,
                status: ProjectStatus::Cancelled
            }
        );
    }

    #[test]
    fn completed_project_cannot_be_cancelled() {
        let err = apply(&with_status(ProjectStatus::Completed), &cancel()).unwrap_err();
        assert_matches!(err, LifecycleError::IllegalTransition { .. });
    }

    // -----------------------------------------------------------------------
    // Start / Complete
    // -----------------------------------------------------------------------

    #[test]
    fn start_moves_schedule_with_duration() {
        let command = LifecycleCommand::Start(StartParams {
            start_date: Some(date(2024, 2, 5)),
            reason: None,
        });
        let started = apply(&planning_project(), &command).unwrap();
        assert_eq!(started.status, ProjectStatus::InProgress);
        assert_eq!(started.start_date, Some(date(2024, 2, 5)));
        assert_eq!(started.planned_end_date, Some(date(2024, 3, 6)));
        assert_eq!(started.notes, "Project start:\nStart date: 2024-02-05");
    }

    #[test]
    fn start_only_from_planning() {
        let command = LifecycleCommand::Start(StartParams {
            start_date: Some(date(2024, 2, 5)),
            reason: None,
        });
        let err = apply(&with_status(ProjectStatus::InProgress), &command).unwrap_err();
        assert_matches!(err, LifecycleError::IllegalTransition { .. });
    }

    #[test]
    fn complete_in_progress_project() {
        let command = LifecycleCommand::Complete(CompleteParams {
            completion_date: Some(date(2024, 3, 1)),
            reason: Some("handed over".to_string()),
        });
        let completed = apply(&with_status(ProjectStatus::InProgress), &command).unwrap();
        assert_eq!(completed.status, ProjectStatus::Completed);
        assert_eq!(completed.actual_end_date, Some(date(2024, 3, 1)));
        assert!(available_commands(completed.status).is_empty());
    }

    #[test]
    fn complete_before_start_is_invalid() {
        let command = LifecycleCommand::Complete(CompleteParams {
            completion_date: Some(date(2023, 12, 1)),
            reason: None,
        });
        let err = apply(&with_status(ProjectStatus::InProgress), &command).unwrap_err();
        assert_eq!(err.field(), Some("completion_date"));
    }

    // -----------------------------------------------------------------------
    // Audit log
    // -----------------------------------------------------------------------

    #[test]
    fn each_successful_command_adds_exactly_one_entry() {
        let once = apply(&planning_project(), &extend(5)).unwrap();
        let twice = apply(&once, &extend(5)).unwrap();
        assert_eq!(count_entries(&once.notes, "Extension"), 1);
        assert_eq!(count_entries(&twice.notes, "Extension"), 2);
        assert_eq!(twice.duration_days, Some(40));
    }

    #[test]
    fn failed_command_adds_no_entry() {
        let project = planning_project();
        assert!(apply(&project, &extend(0)).is_err());
        assert!(project.notes.is_empty());
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn command_deserializes_from_tagged_json() {
        let command: LifecycleCommand = serde_json::from_str(
            r#"{"command":"suspend","suspension_date":"2024-02-10","suspension_duration_days":10,"reason":"weather"}"#,
        )
        .unwrap();
        assert_eq!(command, suspend(10, "weather"));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let result: Result<LifecycleCommand, _> =
            serde_json::from_str(r#"{"command":"archive"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn status_ids_match_seed_data() {
        assert_eq!(ProjectStatus::Planning.id(), 1);
        assert_eq!(ProjectStatus::InProgress.id(), 2);
        assert_eq!(ProjectStatus::Suspended.id(), 3);
        assert_eq!(ProjectStatus::Completed.id(), 4);
        assert_eq!(ProjectStatus::Cancelled.id(), 5);
        assert_eq!(ProjectStatus::from_id(3), Some(ProjectStatus::Suspended));
        assert_eq!(ProjectStatus::from_id(9), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
