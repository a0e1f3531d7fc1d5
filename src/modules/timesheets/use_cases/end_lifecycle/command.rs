use crate::shared::core::primitives::{PhaseId, ProjectId};

/// One-way transition of a phase or a project to `ongoing = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndLifecycle {
    Phase(PhaseId),
    Project(ProjectId),
}
