// Entities of the ownership hierarchy Project -> ProjectPhase -> Task -> DatePoint.
//
// Boundaries
// - Plain data plus lifecycle predicates. Persistence lives behind the EntityStore port.
// - A date point never changes its owning task once created.

use crate::modules::timesheets::core::errors::LockReason;
use crate::modules::timesheets::core::phase_index::PhaseDateIndex;
use crate::shared::core::primitives::{ActorId, DatePointId, PhaseId, ProjectId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing address of a project's customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetail {
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub manager: ActorId,
    pub workers: Vec<ActorId>,
    pub clients: Vec<ActorId>,
    pub ongoing: bool,
    /// Rate billed to the customer per approved hour.
    pub hourly_rate: Option<u32>,
    pub client_detail: Option<ClientDetail>,
}

impl Project {
    pub fn has_clients(&self) -> bool {
        !self.clients.is_empty()
    }

    pub fn is_manager(&self, actor: &ActorId) -> bool {
        &self.manager == actor
    }

    pub fn is_worker(&self, actor: &ActorId) -> bool {
        self.workers.contains(actor)
    }

    pub fn is_client(&self, actor: &ActorId) -> bool {
        self.clients.contains(actor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub id: PhaseId,
    pub project_id: ProjectId,
    pub title: String,
    pub ongoing: bool,
    pub index: PhaseDateIndex,
}

impl ProjectPhase {
    pub fn new(project_id: ProjectId, title: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id: PhaseId::generate(),
            project_id,
            title: title.into(),
            ongoing: true,
            index: PhaseDateIndex::new(created_on),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub phase_id: PhaseId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePoint {
    pub id: DatePointId,
    pub task_id: TaskId,
    pub worker: ActorId,
    pub title: String,
    pub description: String,
    pub worked_date: NaiveDate,
    pub worked_hours: u8,
    pub approved_by_manager: bool,
    pub approved_by_client: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A stored entity together with the version used for compare-and-set writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: i64,
}

/// Reference to any node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Project(ProjectId),
    Phase(PhaseId),
    Task(TaskId),
    DatePoint(DatePointId),
}

/// The resolved ancestor chain of a target, up to and including its project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    pub project: Project,
    pub phase: Option<ProjectPhase>,
    pub task: Option<Task>,
    pub datepoint: Option<Versioned<DatePoint>>,
}

impl Lineage {
    pub fn of_project(project: Project) -> Self {
        Self {
            project,
            phase: None,
            task: None,
            datepoint: None,
        }
    }

    /// Ongoing check for writes below this lineage. The project is checked first.
    pub fn lifecycle_lock(&self) -> Option<LockReason> {
        if !self.project.ongoing {
            return Some(LockReason::ProjectEnded);
        }
        match &self.phase {
            Some(phase) if !phase.ongoing => Some(LockReason::PhaseEnded),
            _ => None,
        }
    }
}
