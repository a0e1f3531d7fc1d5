use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::actor::Role;
use crate::modules::timesheets::core::approval::{ApprovalSlot, ensure_slot_applicable, toggle};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::ports::DatePointWrite;
use crate::modules::timesheets::use_cases::context::RequestContext;
use crate::modules::timesheets::use_cases::toggle_approval::command::ToggleApproval;
use crate::modules::timesheets::use_cases::toggle_approval::decision::ToggleDecision;

fn slot_owner(slot: ApprovalSlot) -> Role {
    match slot {
        ApprovalSlot::Manager => Role::Manager,
        ApprovalSlot::Client => Role::Client,
    }
}

/// Flips one sign-off on the stored value. Order of checks:
/// visibility, slot applicability, slot ownership, approve capability, lifecycle.
pub fn decide_toggle(
    context: &RequestContext,
    command: ToggleApproval,
) -> Result<ToggleDecision, DecideError> {
    let RequestContext { actor, lineage } = context;
    ensure(actor, lineage, Capability::View)?;
    ensure_slot_applicable(command.slot, &lineage.project)?;
    if !actor.has_role(slot_owner(command.slot)) {
        return Err(DecideError::AuthorizationDenied);
    }
    ensure(actor, lineage, Capability::Approve)?;
    let stored = lineage.datepoint.as_ref().ok_or(DecideError::NotFound)?;
    if let Some(reason) = lineage.lifecycle_lock() {
        return Err(DecideError::LifecycleLocked(reason));
    }

    let mut datepoint = stored.value.clone();
    let approved = toggle(&mut datepoint, command.slot);
    datepoint.updated_at = command.requested_at;
    Ok(ToggleDecision {
        write: DatePointWrite {
            datepoint,
            expected_version: stored.version,
            touch: None,
        },
        approved,
    })
}
