use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::modules::timesheets::use_cases::toggle_approval::command::ToggleApproval;
use crate::modules::timesheets::use_cases::toggle_approval::decide::decide_toggle;
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

/// The flip is applied to the value read at the start of the request and committed
/// against that value's version, so a toggle based on a stale read fails with Conflict.
pub struct ToggleApprovalHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ToggleApprovalHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the new value of the toggled flag.
    pub async fn handle(
        &self,
        actor_id: &ActorId,
        command: ToggleApproval,
    ) -> Result<bool, ApplicationError> {
        self.toggle(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("toggle_approval", actor_id, error))
    }

    async fn toggle(&self, actor_id: &ActorId, command: ToggleApproval) -> Result<bool, ApplicationError> {
        let target = EntityRef::DatePoint(command.datepoint_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let slot = command.slot;
        let decision = decide_toggle(&context, command)?;
        let datepoint_id = decision.write.datepoint.id.clone();

        self.store.commit_datepoint(decision.write).await?;
        tracing::info!(
            actor_id = %actor_id,
            datepoint_id = %datepoint_id,
            %slot,
            approved = decision.approved,
            "approval toggled"
        );
        Ok(decision.approved)
    }
}
