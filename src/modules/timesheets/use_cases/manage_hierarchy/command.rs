use crate::modules::timesheets::core::hierarchy::ClientDetail;
use crate::shared::core::primitives::{ActorId, PhaseId, ProjectId, TaskId};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub workers: Vec<ActorId>,
    pub clients: Vec<ActorId>,
    pub hourly_rate: Option<u32>,
    pub client_detail: Option<ClientDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPhase {
    pub phase_id: PhaseId,
    pub project_id: ProjectId,
    pub title: String,
    pub created_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTask {
    pub task_id: TaskId,
    pub phase_id: PhaseId,
    pub title: String,
    pub description: String,
}

/// Replaces both member sets of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignMembers {
    pub project_id: ProjectId,
    pub workers: Vec<ActorId>,
    pub clients: Vec<ActorId>,
}
