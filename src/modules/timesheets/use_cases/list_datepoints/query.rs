use crate::shared::core::primitives::{ActorId, PhaseId, TaskId, YearMonth};

/// The table view of one phase, optionally narrowed by worker, task or month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDatePoints {
    pub phase_id: PhaseId,
    pub worker_id: Option<ActorId>,
    pub task_id: Option<TaskId>,
    pub month: Option<YearMonth>,
}
