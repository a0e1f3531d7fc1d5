use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::create_datepoint::command::CreateDatePoint;
use crate::modules::timesheets::use_cases::create_datepoint::decide::decide_create;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::{ActorId, DatePointId};
use std::sync::Arc;

pub struct CreateDatePointHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateDatePointHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        command: CreateDatePoint,
    ) -> Result<DatePointId, ApplicationError> {
        self.create(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("create_datepoint", actor_id, error))
    }

    async fn create(
        &self,
        actor_id: &ActorId,
        command: CreateDatePoint,
    ) -> Result<DatePointId, ApplicationError> {
        let target = EntityRef::Task(command.task_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let write = decide_create(&context, command)?;
        let datepoint_id = write.datepoint.id.clone();
        let worked_date = write.datepoint.worked_date;

        self.store.commit_datepoint(write).await?;
        tracing::info!(
            actor_id = %actor_id,
            datepoint_id = %datepoint_id,
            %worked_date,
            "date point created"
        );
        Ok(datepoint_id)
    }
}
