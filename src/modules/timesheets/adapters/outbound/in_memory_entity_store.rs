// In memory implementation of the EntityStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep every table behind one lock, so a date point write and its phase index
//   touch land together and writers to the same phase are serialized.
// - Enforce optimistic concurrency on date points by checking the expected version.

use crate::modules::timesheets::core::actor::{Actor, Role};
use crate::modules::timesheets::core::aggregation::PlacedDatePoint;
use crate::modules::timesheets::core::errors::LockReason;
use crate::modules::timesheets::core::hierarchy::{
    DatePoint, Project, ProjectPhase, Task, Versioned,
};
use crate::modules::timesheets::core::ports::{
    DatePointQuery, DatePointWrite, EntityStore, StoreError,
};
use crate::shared::core::primitives::{ActorId, DatePointId, PhaseId, ProjectId, TaskId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    actors: HashMap<ActorId, Actor>,
    projects: HashMap<ProjectId, Project>,
    phases: HashMap<PhaseId, ProjectPhase>,
    tasks: HashMap<TaskId, Task>,
    datepoints: HashMap<DatePointId, Versioned<DatePoint>>,
}

impl Tables {
    fn place(&self, datepoint: &DatePoint) -> Option<(&ProjectPhase, &Project)> {
        let task = self.tasks.get(&datepoint.task_id)?;
        let phase = self.phases.get(&task.phase_id)?;
        let project = self.projects.get(&phase.project_id)?;
        Some((phase, project))
    }
}

#[derive(Default)]
pub struct InMemoryEntityStore {
    tables: RwLock<Tables>,
    is_offline: bool,
    delay_commit_ms: AtomicU64,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widens the window between a handler's read and its commit.
    pub fn set_delay_commit_ms(&self, ms: u64) {
        self.delay_commit_ms.store(ms, Ordering::Relaxed);
    }

    fn online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

fn closed(project: &Project, phase: Option<&ProjectPhase>) -> Option<LockReason> {
    if !project.ongoing {
        return Some(LockReason::ProjectEnded);
    }
    phase
        .filter(|phase| !phase.ongoing)
        .map(|_| LockReason::PhaseEnded)
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn actor(&self, id: &ActorId) -> Result<Option<Actor>, StoreError> {
        self.online()?;
        Ok(self.tables.read().await.actors.get(id).cloned())
    }

    async fn project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        self.online()?;
        Ok(self.tables.read().await.projects.get(id).cloned())
    }

    async fn phase(&self, id: &PhaseId) -> Result<Option<ProjectPhase>, StoreError> {
        self.online()?;
        Ok(self.tables.read().await.phases.get(id).cloned())
    }

    async fn task(&self, id: &TaskId) -> Result<Option<Task>, StoreError> {
        self.online()?;
        Ok(self.tables.read().await.tasks.get(id).cloned())
    }

    async fn datepoint(
        &self,
        id: &DatePointId,
    ) -> Result<Option<Versioned<DatePoint>>, StoreError> {
        self.online()?;
        Ok(self.tables.read().await.datepoints.get(id).cloned())
    }

    async fn projects_of(&self, actor: &ActorId) -> Result<Vec<Project>, StoreError> {
        self.online()?;
        let guard = self.tables.read().await;
        let role = guard.actors.get(actor).and_then(|a| a.role);
        let mut items: Vec<Project> = guard
            .projects
            .values()
            .filter(|project| match role {
                Some(Role::Manager) => project.is_manager(actor),
                Some(Role::Worker) => project.is_worker(actor),
                Some(Role::Client) => project.is_client(actor),
                None => false,
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn datepoints(
        &self,
        query: &DatePointQuery,
    ) -> Result<Vec<PlacedDatePoint>, StoreError> {
        self.online()?;
        let guard = self.tables.read().await;
        let mut items: Vec<PlacedDatePoint> = guard
            .datepoints
            .values()
            .filter_map(|stored| {
                let datepoint = &stored.value;
                let (phase, project) = guard.place(datepoint)?;
                let matches = query.task_id.as_ref().is_none_or(|t| t == &datepoint.task_id)
                    && query.phase_id.as_ref().is_none_or(|p| p == &phase.id)
                    && query.project_id.as_ref().is_none_or(|p| p == &project.id)
                    && query.worker_id.as_ref().is_none_or(|w| w == &datepoint.worker)
                    && query.month.is_none_or(|m| m.contains(datepoint.worked_date));
                matches.then(|| PlacedDatePoint {
                    datepoint: datepoint.clone(),
                    phase_id: phase.id.clone(),
                    project_id: project.id.clone(),
                })
            })
            .collect();
        items.sort_by(|a, b| {
            a.datepoint
                .worked_date
                .cmp(&b.datepoint.worked_date)
                .then_with(|| a.datepoint.created_at.cmp(&b.datepoint.created_at))
                .then_with(|| a.datepoint.id.cmp(&b.datepoint.id))
        });
        Ok(items)
    }

    async fn save_actor(&self, actor: Actor) -> Result<(), StoreError> {
        self.online()?;
        self.tables.write().await.actors.insert(actor.id.clone(), actor);
        Ok(())
    }

    async fn save_project(&self, project: Project) -> Result<(), StoreError> {
        self.online()?;
        self.tables
            .write()
            .await
            .projects
            .insert(project.id.clone(), project);
        Ok(())
    }

    async fn insert_phase(&self, phase: ProjectPhase) -> Result<(), StoreError> {
        self.online()?;
        let mut guard = self.tables.write().await;
        let project = guard
            .projects
            .get(&phase.project_id)
            .ok_or_else(|| StoreError::Missing(format!("project {}", phase.project_id)))?;
        if let Some(reason) = closed(project, None) {
            return Err(StoreError::Closed(reason));
        }
        guard.phases.insert(phase.id.clone(), phase);
        Ok(())
    }

    async fn insert_task(&self, task: Task) -> Result<(), StoreError> {
        self.online()?;
        let mut guard = self.tables.write().await;
        let phase = guard
            .phases
            .get(&task.phase_id)
            .ok_or_else(|| StoreError::Missing(format!("phase {}", task.phase_id)))?;
        let project = guard
            .projects
            .get(&phase.project_id)
            .ok_or_else(|| StoreError::Missing(format!("project {}", phase.project_id)))?;
        if let Some(reason) = closed(project, Some(phase)) {
            return Err(StoreError::Closed(reason));
        }
        guard.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    async fn commit_datepoint(&self, write: DatePointWrite) -> Result<i64, StoreError> {
        self.online()?;
        let delay = self.delay_commit_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.tables.write().await;
        let current = guard.datepoints.get(&write.datepoint.id);
        let actual = current.map_or(0, |stored| stored.version);
        if actual != write.expected_version {
            return Err(StoreError::VersionMismatch {
                expected: write.expected_version,
                actual,
            });
        }
        if current.is_some_and(|stored| stored.value.task_id != write.datepoint.task_id) {
            return Err(StoreError::Backend(
                "date point cannot move to another task".into(),
            ));
        }

        let phase_id = {
            let (phase, project) = guard.place(&write.datepoint).ok_or_else(|| {
                StoreError::Missing(format!("task {}", write.datepoint.task_id))
            })?;
            if let Some(reason) = closed(project, Some(phase)) {
                return Err(StoreError::Closed(reason));
            }
            phase.id.clone()
        };

        if let (Some(date), Some(phase)) = (write.touch, guard.phases.get_mut(&phase_id)) {
            phase.index.record_touch(date);
        }
        let version = actual + 1;
        guard.datepoints.insert(
            write.datepoint.id.clone(),
            Versioned {
                value: write.datepoint,
                version,
            },
        );
        Ok(version)
    }

    async fn end_phase(&self, id: &PhaseId) -> Result<(), StoreError> {
        self.online()?;
        let mut guard = self.tables.write().await;
        let phase = guard
            .phases
            .get_mut(id)
            .ok_or_else(|| StoreError::Missing(format!("phase {id}")))?;
        phase.ongoing = false;
        Ok(())
    }

    async fn end_project(&self, id: &ProjectId) -> Result<(), StoreError> {
        self.online()?;
        let mut guard = self.tables.write().await;
        let project = guard
            .projects
            .get_mut(id)
            .ok_or_else(|| StoreError::Missing(format!("project {id}")))?;
        project.ongoing = false;
        guard
            .phases
            .values_mut()
            .filter(|phase| &phase.project_id == id)
            .for_each(|phase| phase.ongoing = false);
        Ok(())
    }
}
