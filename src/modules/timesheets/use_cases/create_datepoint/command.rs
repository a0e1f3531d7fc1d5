use crate::shared::core::primitives::{DatePointId, TaskId};

/// Raw input of a new time entry. Fields are validated by the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatePoint {
    pub datepoint_id: DatePointId,
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    pub worked_date: String,
    pub worked_hours: i64,
    pub requested_at: i64,
}
