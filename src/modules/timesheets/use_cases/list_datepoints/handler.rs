use crate::modules::timesheets::core::access::{Capability, ensure};
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::{DatePointQuery, EntityStore};
use crate::modules::timesheets::use_cases::context::resolve;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::modules::timesheets::use_cases::list_datepoints::decide::{DatePointRow, to_rows};
use crate::modules::timesheets::use_cases::list_datepoints::query::ListDatePoints;
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

pub struct ListDatePointsHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListDatePointsHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        query: ListDatePoints,
    ) -> Result<Vec<DatePointRow>, ApplicationError> {
        self.list(actor_id, query)
            .await
            .inspect_err(|error| trace_failure("list_datepoints", actor_id, error))
    }

    async fn list(
        &self,
        actor_id: &ActorId,
        query: ListDatePoints,
    ) -> Result<Vec<DatePointRow>, ApplicationError> {
        let target = EntityRef::Phase(query.phase_id.clone());
        let context = resolve(&*self.store, actor_id, &target).await?;
        ensure(&context.actor, &context.lineage, Capability::View)?;

        let entries = self
            .store
            .datepoints(&DatePointQuery {
                phase_id: Some(query.phase_id),
                task_id: query.task_id,
                worker_id: query.worker_id,
                month: query.month,
                ..Default::default()
            })
            .await?;
        Ok(to_rows(&context.lineage.project, entries))
    }
}
