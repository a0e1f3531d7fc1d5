use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::end_lifecycle::command::EndLifecycle;
use crate::modules::timesheets::use_cases::end_lifecycle::decide::decide_end;
use crate::modules::timesheets::use_cases::end_lifecycle::decision::EndDecision;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

pub struct EndLifecycleHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EndLifecycleHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        command: EndLifecycle,
    ) -> Result<EndDecision, ApplicationError> {
        self.end(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("end_lifecycle", actor_id, error))
    }

    async fn end(&self, actor_id: &ActorId, command: EndLifecycle) -> Result<EndDecision, ApplicationError> {
        let target = match &command {
            EndLifecycle::Phase(id) => EntityRef::Phase(id.clone()),
            EndLifecycle::Project(id) => EntityRef::Project(id.clone()),
        };
        let context = resolve(&*self.store, actor_id, &target).await?;
        let decision = decide_end(&context, &command)?;
        if decision == EndDecision::AlreadyEnded {
            tracing::info!(actor_id = %actor_id, ?target, "already ended");
            return Ok(decision);
        }

        match &command {
            EndLifecycle::Phase(id) => self.store.end_phase(id).await?,
            EndLifecycle::Project(id) => self.store.end_project(id).await?,
        }
        tracing::info!(actor_id = %actor_id, ?target, "ended");
        Ok(decision)
    }
}
