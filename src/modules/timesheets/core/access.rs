// Role and ownership guard for every node of the project hierarchy.
//
// Purpose
// - Decide whether an actor may view, create children under, edit, or approve a target,
//   by checking the actor's membership on the project the target belongs to.
//
// Structure
// - Independent guard predicates, evaluated in a fixed order. The first denial wins.
//   has_role -> belongs_to_project -> role_grants_capability -> owns_leaf
//
// Boundaries
// - Pure. The caller resolves the lineage of the target beforehand.
// - Existence hiding is applied by `ensure`: an actor that cannot view the project gets
//   NotFound, an actor that can view but lacks the capability gets AuthorizationDenied.

use crate::modules::timesheets::core::actor::{Actor, Role};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::{Lineage, Project};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    View,
    CreateChild,
    Edit,
    Approve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    NoRole,
    NotMember,
    NotGranted,
    NotOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Allow,
    Deny(Denial),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

pub struct AccessRequest<'a> {
    pub actor: &'a Actor,
    pub lineage: &'a Lineage,
    pub capability: Capability,
}

type Guard = fn(&AccessRequest<'_>) -> Result<(), Denial>;

const GUARDS: [Guard; 4] = [has_role, belongs_to_project, role_grants_capability, owns_leaf];

pub fn authorize(actor: &Actor, lineage: &Lineage, capability: Capability) -> Verdict {
    let request = AccessRequest {
        actor,
        lineage,
        capability,
    };
    match GUARDS.iter().try_for_each(|guard| guard(&request)) {
        Ok(()) => Verdict::Allow,
        Err(denial) => Verdict::Deny(denial),
    }
}

/// Authorizes and translates a denial into the caller-visible error kind.
pub fn ensure(actor: &Actor, lineage: &Lineage, capability: Capability) -> Result<(), DecideError> {
    if actor.role.is_none() {
        return Err(DecideError::AuthorizationDenied);
    }
    if !authorize(actor, lineage, Capability::View).is_allowed() {
        return Err(DecideError::NotFound);
    }
    match authorize(actor, lineage, capability) {
        Verdict::Allow => Ok(()),
        Verdict::Deny(_) => Err(DecideError::AuthorizationDenied),
    }
}

/// Project-level visibility, for list and summary queries that span several projects.
pub fn can_view_project(actor: &Actor, project: &Project) -> bool {
    match actor.role {
        Some(Role::Worker) => project.is_worker(&actor.id),
        Some(Role::Manager) => project.is_manager(&actor.id),
        Some(Role::Client) => project.is_client(&actor.id),
        None => false,
    }
}

fn has_role(request: &AccessRequest<'_>) -> Result<(), Denial> {
    request.actor.role.map(|_| ()).ok_or(Denial::NoRole)
}

fn belongs_to_project(request: &AccessRequest<'_>) -> Result<(), Denial> {
    if can_view_project(request.actor, &request.lineage.project) {
        Ok(())
    } else {
        Err(Denial::NotMember)
    }
}

fn role_grants_capability(request: &AccessRequest<'_>) -> Result<(), Denial> {
    let granted = match (request.actor.role, request.capability) {
        (Some(Role::Worker), Capability::Approve) => false,
        (Some(Role::Worker), _) => true,
        (Some(Role::Manager), _) => true,
        (Some(Role::Client), Capability::View) => true,
        (Some(Role::Client), Capability::Approve) => request.lineage.project.has_clients(),
        (Some(Role::Client), _) => false,
        (None, _) => false,
    };
    if granted { Ok(()) } else { Err(Denial::NotGranted) }
}

fn owns_leaf(request: &AccessRequest<'_>) -> Result<(), Denial> {
    let worker_edit = request.actor.has_role(Role::Worker) && request.capability == Capability::Edit;
    match &request.lineage.datepoint {
        Some(datepoint) if worker_edit && datepoint.value.worker != request.actor.id => {
            Err(Denial::NotOwner)
        }
        _ => Ok(()),
    }
}
