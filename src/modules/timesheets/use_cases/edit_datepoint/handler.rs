use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::edit_datepoint::command::EditDatePoint;
use crate::modules::timesheets::use_cases::edit_datepoint::decide::decide_edit;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

pub struct EditDatePointHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EditDatePointHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the new version of the entry.
    pub async fn handle(
        &self,
        actor_id: &ActorId,
        command: EditDatePoint,
    ) -> Result<i64, ApplicationError> {
        self.edit(actor_id, command)
            .await
            .inspect_err(|error| trace_failure("edit_datepoint", actor_id, error))
    }

    async fn edit(&self, actor_id: &ActorId, command: EditDatePoint) -> Result<i64, ApplicationError> {
        let target = EntityRef::DatePoint(command.datepoint_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        let write = decide_edit(&context, command)?;
        let datepoint_id = write.datepoint.id.clone();

        let version = self.store.commit_datepoint(write).await?;
        tracing::info!(
            actor_id = %actor_id,
            datepoint_id = %datepoint_id,
            version,
            "date point edited"
        );
        Ok(version)
    }
}
