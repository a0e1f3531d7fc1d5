// Who may see which summary, and which projects feed it.
//
// Rules
// - Task, phase and project summaries need `view` on the target and bill at the
//   project's rate.
// - A worker summary is open to the worker themself and to managers. A manager only
//   sees the entries from projects they manage.
// - Entries from projects the requester cannot view never enter a summary.

use crate::modules::timesheets::core::access::{Capability, can_view_project, ensure};
use crate::modules::timesheets::core::actor::{Actor, Role};
use crate::modules::timesheets::core::aggregation::Rate;
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::Project;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::shared::core::primitives::ProjectId;
use std::collections::HashMap;

pub fn decide_hierarchy_summary(context: &RequestContext) -> Result<(Project, Rate), DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, Capability::View)?;
    Ok((lineage.project.clone(), Rate::project_billing(&lineage.project)))
}

/// `candidates` is the named project, or every project of the requester when the
/// summary spans projects.
pub fn decide_worker_summary(
    requester: &Actor,
    worker: &Actor,
    named_project: Option<&ProjectId>,
    candidates: Vec<Project>,
) -> Result<(HashMap<ProjectId, Project>, Rate), DecideError> {
    if requester.role.is_none() {
        return Err(DecideError::AuthorizationDenied);
    }
    if !worker.has_role(Role::Worker) {
        return Err(DecideError::NotFound);
    }
    let visible: Vec<Project> = candidates
        .into_iter()
        .filter(|project| can_view_project(requester, project))
        .collect();
    if named_project.is_some() && visible.is_empty() {
        return Err(DecideError::NotFound);
    }

    let is_self = requester.id == worker.id;
    if !is_self && !requester.has_role(Role::Manager) {
        return Err(DecideError::AuthorizationDenied);
    }
    let projects = visible
        .into_iter()
        .filter(|project| is_self || project.is_manager(&requester.id))
        .map(|project| (project.id.clone(), project))
        .collect();
    Ok((projects, Rate::worker_pay(worker.hourly_rate)))
}
