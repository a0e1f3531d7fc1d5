// Loads what every decision needs before it runs: the acting actor and the lineage of
// the target, walked from the target up to its project.
//
// Boundaries
// - An actor id that resolves to nothing is AuthorizationDenied.
// - A missing node anywhere on the chain is NotFound.

use crate::modules::timesheets::core::actor::Actor;
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::{EntityRef, Lineage, ProjectPhase, Task};
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{ActorId, PhaseId, ProjectId, TaskId};

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Actor,
    pub lineage: Lineage,
}

fn found<T>(value: Option<T>) -> Result<T, ApplicationError> {
    value.ok_or(ApplicationError::Rejected(DecideError::NotFound))
}

pub async fn load_actor<S>(store: &S, actor_id: &ActorId) -> Result<Actor, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    store
        .actor(actor_id)
        .await?
        .ok_or(ApplicationError::Rejected(DecideError::AuthorizationDenied))
}

pub async fn resolve<S>(
    store: &S,
    actor_id: &ActorId,
    target: &EntityRef,
) -> Result<RequestContext, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    let actor = load_actor(store, actor_id).await?;
    let lineage = lineage_of(store, target).await?;
    Ok(RequestContext { actor, lineage })
}

pub async fn lineage_of<S>(store: &S, target: &EntityRef) -> Result<Lineage, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    match target {
        EntityRef::Project(id) => project_lineage(store, id).await,
        EntityRef::Phase(id) => phase_lineage(store, id).await,
        EntityRef::Task(id) => task_lineage(store, id).await,
        EntityRef::DatePoint(id) => {
            let datepoint = found(store.datepoint(id).await?)?;
            let lineage = task_lineage(store, &datepoint.value.task_id).await?;
            Ok(Lineage {
                datepoint: Some(datepoint),
                ..lineage
            })
        }
    }
}

async fn project_lineage<S>(store: &S, id: &ProjectId) -> Result<Lineage, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    let project = found(store.project(id).await?)?;
    Ok(Lineage::of_project(project))
}

async fn phase_lineage<S>(store: &S, id: &PhaseId) -> Result<Lineage, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    let phase: ProjectPhase = found(store.phase(id).await?)?;
    let project = found(store.project(&phase.project_id).await?)?;
    Ok(Lineage {
        phase: Some(phase),
        ..Lineage::of_project(project)
    })
}

async fn task_lineage<S>(store: &S, id: &TaskId) -> Result<Lineage, ApplicationError>
where
    S: EntityStore + ?Sized,
{
    let task: Task = found(store.task(id).await?)?;
    let lineage = phase_lineage(store, &task.phase_id).await?;
    Ok(Lineage {
        task: Some(task),
        ..lineage
    })
}
