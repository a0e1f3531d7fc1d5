use crate::modules::timesheets::core::approval::ApprovalSlot;
use crate::shared::core::primitives::DatePointId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleApproval {
    pub datepoint_id: DatePointId,
    pub slot: ApprovalSlot,
    pub requested_at: i64,
}
