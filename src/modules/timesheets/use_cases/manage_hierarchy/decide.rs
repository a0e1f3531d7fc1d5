// Decisions for building the hierarchy above date points.
//
// Rules
// - Projects, phases and tasks are created by managers only. The creating manager
//   becomes the project's manager.
// - Members must be known actors with the matching role: workers as workers, clients
//   as clients.
// - Nothing is added below an ended phase or project.

use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::actor::{Actor, Role};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::{ClientDetail, Project, ProjectPhase, Task};
use crate::modules::timesheets::core::phase_index::PhaseDateIndex;
use crate::modules::timesheets::core::validation;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::modules::timesheets::use_cases::manage_hierarchy::command::{
    AddPhase, AddTask, AssignMembers, CreateProject,
};
use crate::shared::core::primitives::ActorId;
use std::collections::HashMap;

fn ensure_managing(context: &RequestContext, capability: Capability) -> Result<(), DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, capability)?;
    if !actor.has_role(Role::Manager) {
        return Err(DecideError::AuthorizationDenied);
    }
    match lineage.lifecycle_lock() {
        Some(reason) => Err(DecideError::LifecycleLocked(reason)),
        None => Ok(()),
    }
}

/// Checks every id against the loaded actors and drops duplicates, keeping the first.
fn members(
    ids: &[ActorId],
    role: Role,
    known: &HashMap<ActorId, Actor>,
) -> Result<Vec<ActorId>, DecideError> {
    let mut accepted: Vec<ActorId> = Vec::with_capacity(ids.len());
    for id in ids {
        match known.get(id) {
            Some(actor) if actor.has_role(role) => {
                if !accepted.contains(id) {
                    accepted.push(id.clone());
                }
            }
            Some(_) => {
                return Err(DecideError::invalid(format!("{id} is not a {role}")));
            }
            None => return Err(DecideError::invalid(format!("unknown actor {id}"))),
        }
    }
    Ok(accepted)
}

fn client_detail(detail: Option<ClientDetail>) -> Result<Option<ClientDetail>, DecideError> {
    match detail {
        Some(detail) if detail.name.trim().is_empty() => {
            Err(DecideError::invalid("client name must not be empty"))
        }
        other => Ok(other),
    }
}

pub fn decide_create_project(
    actor: &Actor,
    command: CreateProject,
    known: &HashMap<ActorId, Actor>,
) -> Result<Project, DecideError> {
    if !actor.has_role(Role::Manager) {
        return Err(DecideError::AuthorizationDenied);
    }
    Ok(Project {
        id: command.project_id,
        title: validation::title(&command.title)?,
        description: validation::description(&command.description)?,
        manager: actor.id.clone(),
        workers: members(&command.workers, Role::Worker, known)?,
        clients: members(&command.clients, Role::Client, known)?,
        ongoing: true,
        hourly_rate: command.hourly_rate,
        client_detail: client_detail(command.client_detail)?,
    })
}

pub fn decide_add_phase(
    context: &RequestContext,
    command: AddPhase,
) -> Result<ProjectPhase, DecideError> {
    ensure_managing(context, Capability::CreateChild)?;
    Ok(ProjectPhase {
        id: command.phase_id,
        project_id: context.lineage.project.id.clone(),
        title: validation::title(&command.title)?,
        ongoing: true,
        index: PhaseDateIndex::new(command.created_on),
    })
}

pub fn decide_add_task(context: &RequestContext, command: AddTask) -> Result<Task, DecideError> {
    ensure_managing(context, Capability::CreateChild)?;
    Ok(Task {
        id: command.task_id,
        phase_id: command.phase_id,
        title: validation::title(&command.title)?,
        description: validation::description(&command.description)?,
    })
}

pub fn decide_assign_members(
    context: &RequestContext,
    command: AssignMembers,
    known: &HashMap<ActorId, Actor>,
) -> Result<Project, DecideError> {
    ensure_managing(context, Capability::Edit)?;
    Ok(Project {
        workers: members(&command.workers, Role::Worker, known)?,
        clients: members(&command.clients, Role::Client, known)?,
        ..context.lineage.project.clone()
    })
}
