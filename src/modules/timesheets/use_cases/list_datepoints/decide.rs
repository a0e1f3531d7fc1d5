use crate::modules::timesheets::core::aggregation::PlacedDatePoint;
use crate::modules::timesheets::core::approval::ApprovalState;
use crate::modules::timesheets::core::calendar::calendar_color;
use crate::modules::timesheets::core::hierarchy::{DatePoint, Project};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePointRow {
    #[serde(flatten)]
    pub datepoint: DatePoint,
    pub approval: ApprovalState,
    pub counts_toward_total: bool,
    /// Colour of the worker in calendar views. `None` once the worker left the project.
    pub color: Option<&'static str>,
}

/// Annotates entries of one project with their derived approval state. Order is kept.
pub fn to_rows(project: &Project, entries: Vec<PlacedDatePoint>) -> Vec<DatePointRow> {
    entries
        .into_iter()
        .map(|entry| {
            let approval = ApprovalState::of(&entry.datepoint, project);
            let color = project
                .workers
                .iter()
                .position(|worker| worker == &entry.datepoint.worker)
                .map(calendar_color);
            DatePointRow {
                datepoint: entry.datepoint,
                approval,
                counts_toward_total: approval.counts_toward_total(),
                color,
            }
        })
        .collect()
}
