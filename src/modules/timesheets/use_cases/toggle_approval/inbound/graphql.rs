use async_graphql::{Context, Enum, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::timesheets::adapters::inbound::graphql::{acting_actor, to_gql_error};
use crate::modules::timesheets::core::approval::ApprovalSlot;
use crate::modules::timesheets::use_cases::toggle_approval::command::ToggleApproval;
use crate::shared::core::primitives::DatePointId;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlApprovalSlot {
    Manager,
    Client,
}

impl From<GqlApprovalSlot> for ApprovalSlot {
    fn from(slot: GqlApprovalSlot) -> Self {
        match slot {
            GqlApprovalSlot::Manager => ApprovalSlot::Manager,
            GqlApprovalSlot::Client => ApprovalSlot::Client,
        }
    }
}

#[derive(Default)]
pub struct ToggleApprovalMutation;

#[Object]
impl ToggleApprovalMutation {
    /// Returns the new value of the flag.
    async fn toggle_approval(
        &self,
        context: &Context<'_>,
        datepoint_id: ID,
        slot: GqlApprovalSlot,
    ) -> GqlResult<bool> {
        let actor_id = acting_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let command = ToggleApproval {
            datepoint_id: DatePointId::from(datepoint_id.as_str()),
            slot: slot.into(),
            requested_at: Utc::now().timestamp_millis(),
        };
        state
            .toggle_approval
            .handle(&actor_id, command)
            .await
            .map_err(to_gql_error)
    }
}
