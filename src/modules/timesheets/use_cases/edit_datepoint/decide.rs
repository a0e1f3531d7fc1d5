use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::actor::Role;
use crate::modules::timesheets::core::approval::{ensure_content_editable, invalidate_on_edit};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::ports::DatePointWrite;
use crate::modules::timesheets::core::validation;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::modules::timesheets::use_cases::edit_datepoint::command::EditDatePoint;

/// Applies the whole patch or nothing. The owning worker is the only editor, and any
/// accepted edit withdraws the manager's sign-off.
pub fn decide_edit(
    context: &RequestContext,
    command: EditDatePoint,
) -> Result<DatePointWrite, DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, Capability::Edit)?;
    if !actor.has_role(Role::Worker) {
        return Err(DecideError::AuthorizationDenied);
    }
    let stored = lineage.datepoint.as_ref().ok_or(DecideError::NotFound)?;
    if let Some(reason) = lineage.lifecycle_lock() {
        return Err(DecideError::LifecycleLocked(reason));
    }
    ensure_content_editable(&stored.value)?;
    if command.is_empty() {
        return Err(DecideError::invalid("nothing to change"));
    }

    let mut datepoint = stored.value.clone();
    if let Some(title) = &command.title {
        datepoint.title = validation::title(title)?;
    }
    if let Some(description) = &command.description {
        datepoint.description = validation::description(description)?;
    }
    if let Some(worked_date) = &command.worked_date {
        datepoint.worked_date = validation::worked_date(worked_date)?;
    }
    if let Some(worked_hours) = command.worked_hours {
        datepoint.worked_hours = validation::worked_hours(worked_hours)?;
    }
    invalidate_on_edit(&mut datepoint);
    datepoint.updated_at = command.requested_at;

    Ok(DatePointWrite {
        touch: Some(datepoint.worked_date),
        datepoint,
        expected_version: stored.version,
    })
}
