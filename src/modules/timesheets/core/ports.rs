// Ports define what the timesheets core needs from the outside world, without implementing it.
//
// Purpose
// - EntityStore: point lookups, ancestor data, membership queries and the atomic
//   write of a date point together with its phase index.
//
// Responsibilities of an implementation
// - commit_datepoint applies the version check, the ongoing check of the owning phase
//   and project, the date point write and the phase index touch as one unit.
// - Concurrent commits touching the same phase are serialized.
//
// Testing guidance
// - Provide an in memory implementation for tests and local development.

use crate::modules::timesheets::core::actor::Actor;
use crate::modules::timesheets::core::aggregation::PlacedDatePoint;
use crate::modules::timesheets::core::errors::LockReason;
use crate::modules::timesheets::core::hierarchy::{
    DatePoint, Project, ProjectPhase, Task, Versioned,
};
use crate::shared::core::primitives::{
    ActorId, DatePointId, PhaseId, ProjectId, TaskId, YearMonth,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("write rejected: {0}")]
    Closed(LockReason),

    #[error("missing {0}")]
    Missing(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A date point write. `expected_version` is 0 for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePointWrite {
    pub datepoint: DatePoint,
    pub expected_version: i64,
    pub touch: Option<NaiveDate>,
}

/// Filter over stored date points. Unset fields do not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePointQuery {
    pub project_id: Option<ProjectId>,
    pub phase_id: Option<PhaseId>,
    pub task_id: Option<TaskId>,
    pub worker_id: Option<ActorId>,
    pub month: Option<YearMonth>,
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn actor(&self, id: &ActorId) -> Result<Option<Actor>, StoreError>;
    async fn project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;
    async fn phase(&self, id: &PhaseId) -> Result<Option<ProjectPhase>, StoreError>;
    async fn task(&self, id: &TaskId) -> Result<Option<Task>, StoreError>;
    async fn datepoint(&self, id: &DatePointId)
    -> Result<Option<Versioned<DatePoint>>, StoreError>;

    /// Projects where the actor is manager, worker or client.
    async fn projects_of(&self, actor: &ActorId) -> Result<Vec<Project>, StoreError>;
    async fn datepoints(&self, query: &DatePointQuery)
    -> Result<Vec<PlacedDatePoint>, StoreError>;

    async fn save_actor(&self, actor: Actor) -> Result<(), StoreError>;
    async fn save_project(&self, project: Project) -> Result<(), StoreError>;
    /// Fails with `Closed` when the parent project has ended.
    async fn insert_phase(&self, phase: ProjectPhase) -> Result<(), StoreError>;
    /// Fails with `Closed` when the parent phase or project has ended.
    async fn insert_task(&self, task: Task) -> Result<(), StoreError>;
    /// Returns the new version of the date point.
    async fn commit_datepoint(&self, write: DatePointWrite) -> Result<i64, StoreError>;

    async fn end_phase(&self, id: &PhaseId) -> Result<(), StoreError>;
    /// Ends the project and every phase it owns.
    async fn end_project(&self, id: &ProjectId) -> Result<(), StoreError>;
}
