// Answers access questions for callers outside the core, such as a rendering layer
// deciding which controls to show.
//
// Rules
// - The verdict is a pure function of current roles and memberships.
// - A target that does not exist is answered like a project the actor is not a member
//   of, so the endpoint reveals nothing about existence.
// - An actor id that resolves to nobody is answered like an actor without a role.

use crate::modules::timesheets::core::access::{Capability, Denial, Verdict, authorize};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::lineage_of;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

pub struct AuthorizeHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> AuthorizeHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        target: &EntityRef,
        capability: Capability,
    ) -> Result<Verdict, ApplicationError> {
        self.verdict(actor_id, target, capability)
            .await
            .inspect_err(|error| trace_failure("authorize", actor_id, error))
    }

    async fn verdict(
        &self,
        actor_id: &ActorId,
        target: &EntityRef,
        capability: Capability,
    ) -> Result<Verdict, ApplicationError> {
        let Some(actor) = self.store.actor(actor_id).await? else {
            return Ok(Verdict::Deny(Denial::NoRole));
        };
        let lineage = match lineage_of(&*self.store, target).await {
            Ok(lineage) => lineage,
            Err(ApplicationError::Rejected(DecideError::NotFound)) if actor.role.is_some() => {
                return Ok(Verdict::Deny(Denial::NotMember));
            }
            Err(ApplicationError::Rejected(DecideError::NotFound)) => {
                return Ok(Verdict::Deny(Denial::NoRole));
            }
            Err(error) => return Err(error),
        };
        let verdict = authorize(&actor, &lineage, capability);
        tracing::debug!(actor_id = %actor_id, ?target, ?capability, ?verdict, "authorized");
        Ok(verdict)
    }
}
