use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::actor::Role;
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::DatePoint;
use crate::modules::timesheets::core::ports::DatePointWrite;
use crate::modules::timesheets::core::validation;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::modules::timesheets::use_cases::create_datepoint::command::CreateDatePoint;

/// Only member workers record time. Checks run in the order access, lifecycle, fields.
pub fn decide_create(
    context: &RequestContext,
    command: CreateDatePoint,
) -> Result<DatePointWrite, DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, Capability::CreateChild)?;
    if !actor.has_role(Role::Worker) {
        return Err(DecideError::AuthorizationDenied);
    }
    if let Some(reason) = lineage.lifecycle_lock() {
        return Err(DecideError::LifecycleLocked(reason));
    }

    let title = validation::title(&command.title)?;
    let description = validation::description(&command.description)?;
    let worked_date = validation::worked_date(&command.worked_date)?;
    let worked_hours = validation::worked_hours(command.worked_hours)?;

    Ok(DatePointWrite {
        datepoint: DatePoint {
            id: command.datepoint_id,
            task_id: command.task_id,
            worker: actor.id.clone(),
            title,
            description,
            worked_date,
            worked_hours,
            approved_by_manager: false,
            approved_by_client: false,
            created_at: command.requested_at,
            updated_at: command.requested_at,
        },
        expected_version: 0,
        touch: Some(worked_date),
    })
}
