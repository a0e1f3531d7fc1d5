use crate::modules::timesheets::core::actor::Actor;
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::{load_actor, resolve};
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::modules::timesheets::use_cases::manage_hierarchy::command::{
    AddPhase, AddTask, AssignMembers, CreateProject,
};
use crate::modules::timesheets::use_cases::manage_hierarchy::decide::{
    decide_add_phase, decide_add_task, decide_assign_members, decide_create_project,
};
use crate::shared::core::primitives::{ActorId, PhaseId, ProjectId, TaskId};
use std::collections::HashMap;
use std::sync::Arc;

pub struct HierarchyHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> HierarchyHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    async fn known_actors(
        &self,
        ids: Vec<&ActorId>,
    ) -> Result<HashMap<ActorId, Actor>, ApplicationError> {
        let mut known = HashMap::new();
        for id in ids {
            if known.contains_key(id) {
                continue;
            }
            if let Some(actor) = self.store.actor(id).await? {
                known.insert(id.clone(), actor);
            }
        }
        Ok(known)
    }

    pub async fn create_project(
        &self,
        actor_id: &ActorId,
        command: CreateProject,
    ) -> Result<ProjectId, ApplicationError> {
        self.create(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("create_project", actor_id, error))
    }

    pub async fn add_phase(
        &self,
        actor_id: &ActorId,
        command: AddPhase,
    ) -> Result<PhaseId, ApplicationError> {
        self.insert_phase(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("add_phase", actor_id, error))
    }

    pub async fn add_task(
        &self,
        actor_id: &ActorId,
        command: AddTask,
    ) -> Result<TaskId, ApplicationError> {
        self.insert_task(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("add_task", actor_id, error))
    }

    pub async fn assign_members(
        &self,
        actor_id: &ActorId,
        command: AssignMembers,
    ) -> Result<(), ApplicationError> {
        self.assign(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("assign_members", actor_id, error))
    }

    async fn create(
        &self,
        actor_id: &ActorId,
        command: CreateProject,
    ) -> Result<ProjectId, ApplicationError> {
        let actor = load_actor(&*self.store, actor_id).await?;
        let known = self
            .known_actors(command.workers.iter().chain(&command.clients).collect())
            .await?;
        let project = decide_create_project(&actor, command, &known)?;
        let project_id = project.id.clone();
        self.store.save_project(project).await?;
        tracing::info!(actor_id = %actor_id, project_id = %project_id, "project created");
        Ok(project_id)
    }

    async fn insert_phase(
        &self,
        actor_id: &ActorId,
        command: AddPhase,
    ) -> Result<PhaseId, ApplicationError> {
        let target = EntityRef::Project(command.project_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let phase = decide_add_phase(&context, command)?;
        let phase_id = phase.id.clone();
        self.store.insert_phase(phase).await?;
        tracing::info!(actor_id = %actor_id, phase_id = %phase_id, "phase added");
        Ok(phase_id)
    }

    async fn insert_task(
        &self,
        actor_id: &ActorId,
        command: AddTask,
    ) -> Result<TaskId, ApplicationError> {
        let target = EntityRef::Phase(command.phase_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let task = decide_add_task(&context, command)?;
        let task_id = task.id.clone();
        self.store.insert_task(task).await?;
        tracing::info!(actor_id = %actor_id, task_id = %task_id, "task added");
        Ok(task_id)
    }

    async fn assign(&self, actor_id: &ActorId, command: AssignMembers) -> Result<(), ApplicationError> {
        let target = EntityRef::Project(command.project_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let known = self
            .known_actors(command.workers.iter().chain(&command.clients).collect())
            .await?;
        let project = decide_assign_members(&context, command, &known)?;
        let (project_id, workers, clients) =
            (project.id.clone(), project.workers.len(), project.clients.len());
        self.store.save_project(project).await?;
        tracing::info!(
            actor_id = %actor_id,
            project_id = %project_id,
            workers,
            clients,
            "members assigned"
        );
        Ok(())
    }
}
