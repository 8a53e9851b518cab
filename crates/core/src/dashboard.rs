//! Portfolio summary shown on the dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lifecycle::ProjectStatus;
use crate::project::Project;
use crate::types::{CalendarDate, DbId};

/// Aggregate figures over a set of projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_projects: usize,
    /// Every status is present, with zero for unused ones.
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub total_cost: f64,
    /// Cost of projects that are not completed or cancelled.
    pub active_cost: f64,
    /// Non-terminal projects whose planned end date is before `today`.
    pub overdue_project_ids: Vec<DbId>,
}

/// Summarize `projects` as of `today`.
pub fn summarize(projects: &[Project], today: CalendarDate) -> DashboardSummary {
    let mut by_status: BTreeMap<ProjectStatus, usize> =
        ProjectStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    let mut total_cost = 0.0;
    let mut active_cost = 0.0;
    let mut overdue_project_ids = Vec::new();

    for project in projects {
        *by_status.entry(project.status).or_default() += 1;
        total_cost += project.cost;

        if project.status.is_terminal() {
            continue;
        }
        active_cost += project.cost;
        if project.planned_end_date.is_some_and(|end| end < today) {
            overdue_project_ids.push(project.id);
        }
    }

    DashboardSummary {
        total_projects: projects.len(),
        by_status,
        total_cost,
        active_cost,
        overdue_project_ids,
    }
}
