// Dual sign-off lattice of a date point.
//
// Purpose
// - Name the four combinations of the manager and client flags, and decide whether an
//   entry's hours count toward totals and pay.
//
// Rules
// - The flags are independent booleans. The state is derived, never stored.
// - An entry counts once the manager approved it and, when the project has clients,
//   a client approved it too.
// - A client approval freezes the entry's content.

use crate::modules::timesheets::core::errors::{DecideError, LockReason};
use crate::modules::timesheets::core::hierarchy::{DatePoint, Project};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalSlot {
    Manager,
    Client,
}

impl fmt::Display for ApprovalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalSlot::Manager => f.write_str("manager"),
            ApprovalSlot::Client => f.write_str("client"),
        }
    }
}

impl std::str::FromStr for ApprovalSlot {
    type Err = DecideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(ApprovalSlot::Manager),
            "client" => Ok(ApprovalSlot::Client),
            other => Err(DecideError::invalid(format!("unknown approval slot `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    Draft,
    ManagerApproved,
    ClientApproved,
    FullyApproved,
}

impl ApprovalState {
    pub fn of(datepoint: &DatePoint, project: &Project) -> Self {
        let client_satisfied = datepoint.approved_by_client || !project.has_clients();
        match (datepoint.approved_by_manager, datepoint.approved_by_client) {
            (true, _) if client_satisfied => ApprovalState::FullyApproved,
            (true, _) => ApprovalState::ManagerApproved,
            (false, true) => ApprovalState::ClientApproved,
            (false, false) => ApprovalState::Draft,
        }
    }

    pub fn counts_toward_total(&self) -> bool {
        matches!(self, ApprovalState::FullyApproved)
    }
}

pub fn counts_toward_total(datepoint: &DatePoint, project: &Project) -> bool {
    ApprovalState::of(datepoint, project).counts_toward_total()
}

/// Content is frozen once a client has signed off.
pub fn ensure_content_editable(datepoint: &DatePoint) -> Result<(), DecideError> {
    if datepoint.approved_by_client {
        return Err(DecideError::LifecycleLocked(LockReason::ClientApproved));
    }
    Ok(())
}

/// The client slot only exists on projects with client oversight.
pub fn ensure_slot_applicable(slot: ApprovalSlot, project: &Project) -> Result<(), DecideError> {
    if slot == ApprovalSlot::Client && !project.has_clients() {
        return Err(DecideError::NotApplicable(
            "project has no clients to approve".into(),
        ));
    }
    Ok(())
}

/// Negates the flag of `slot` on the given stored value and returns the new flag.
pub fn toggle(datepoint: &mut DatePoint, slot: ApprovalSlot) -> bool {
    let flag = match slot {
        ApprovalSlot::Manager => &mut datepoint.approved_by_manager,
        ApprovalSlot::Client => &mut datepoint.approved_by_client,
    };
    *flag = !*flag;
    *flag
}

/// Any content change invalidates the manager's sign-off.
pub fn invalidate_on_edit(datepoint: &mut DatePoint) {
    datepoint.approved_by_manager = false;
}
