use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::Project;
use crate::modules::timesheets::core::ports::EntityStore;
use crate::modules::timesheets::use_cases::context::load_actor;
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::shared::core::primitives::ActorId;
use std::sync::Arc;

/// Lists the projects the actor takes part in through its role, ordered by title.
pub struct ListProjectsHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListProjectsHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, actor_id: &ActorId) -> Result<Vec<Project>, ApplicationError> {
        self.list(actor_id)
            .await
            .inspect_err(|error| trace_failure("list_projects", actor_id, error))
    }

    async fn list(&self, actor_id: &ActorId) -> Result<Vec<Project>, ApplicationError> {
        let actor = load_actor(&*self.store, actor_id).await?;
        if actor.role.is_none() {
            return Err(DecideError::AuthorizationDenied.into());
        }
        Ok(self.store.projects_of(actor_id).await?)
    }
}
