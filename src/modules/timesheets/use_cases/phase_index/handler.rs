use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::phase_index::PhaseIndexSnapshot;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::{ActorId, PhaseId};
use std::sync::Arc;

/// Reads the activity index of a phase for anyone who can view the phase.
pub struct PhaseIndexHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PhaseIndexHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        phase_id: &PhaseId,
    ) -> Result<PhaseIndexSnapshot, ApplicationError> {
        self.snapshot(actor_id, phase_id)
            .await
            .inspect_err(|error| trace_failure("phase_index", actor_id, error))
    }

    async fn snapshot(
        &self,
        actor_id: &ActorId,
        phase_id: &PhaseId,
    ) -> Result<PhaseIndexSnapshot, ApplicationError> {
        let target = EntityRef::Phase(phase_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        ensure(&context.actor, &context.lineage, Capability::View)?;
        let phase = context.lineage.phase.ok_or(DecideError::NotFound)?;
        Ok(phase.index.snapshot())
    }
}
