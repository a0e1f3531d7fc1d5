use crate::modules::timesheets::core::aggregation::{Summary, SummaryScope, summarize};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::core::ports::{DatePointQuery, EntityStore};
use crate::modules::timesheets::use_cases::context::{load_actor, resolve};
use crate::modules::timesheets::use_cases::errors::{ApplicationError, trace_failure};
use crate::modules::timesheets::use_cases::summarize::decide::{
    decide_hierarchy_summary, decide_worker_summary,
};
use crate::modules::timesheets::use_cases::summarize::query::Summarize;
use crate::shared::core::primitives::{ActorId, ProjectId, YearMonth};
use std::collections::HashMap;
use std::sync::Arc;

pub struct SummarizeHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SummarizeHandler<TStore>
where
    TStore: EntityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        actor_id: &ActorId,
        query: Summarize,
    ) -> Result<Summary, ApplicationError> {
        let summary = match &query.scope {
            SummaryScope::Worker {
                worker_id,
                project_id,
            } => {
                self.worker_summary(actor_id, worker_id, project_id.as_ref(), query.month)
                    .await
            }
            scope => self.hierarchy_summary(actor_id, scope, query.month).await,
        };
        summary.inspect_err(|error| trace_failure("summarize", actor_id, error))
    }

    async fn hierarchy_summary(
        &self,
        actor_id: &ActorId,
        scope: &SummaryScope,
        month: Option<YearMonth>,
    ) -> Result<Summary, ApplicationError> {
        let (target, filter) = match scope {
            SummaryScope::Task { task_id } => (
                EntityRef::Task(task_id.clone()),
                DatePointQuery {
                    task_id: Some(task_id.clone()),
                    ..Default::default()
                },
            ),
            SummaryScope::Phase { phase_id } => (
                EntityRef::Phase(phase_id.clone()),
                DatePointQuery {
                    phase_id: Some(phase_id.clone()),
                    ..Default::default()
                },
            ),
            SummaryScope::Project { project_id } => (
                EntityRef::Project(project_id.clone()),
                DatePointQuery {
                    project_id: Some(project_id.clone()),
                    ..Default::default()
                },
            ),
            SummaryScope::Worker { .. } => {
                return Err(DecideError::invalid("worker scope is not a hierarchy node").into());
            }
        };
        let context = resolve(&*self.store, actor_id, &target).await?;
        let (project, rate) = decide_hierarchy_summary(&context)?;

        let entries = self
            .store
            .datepoints(&DatePointQuery { month, ..filter })
            .await?;
        let projects = HashMap::from([(project.id.clone(), project)]);
        let summary = summarize(scope, month, &entries, &projects, rate);
        tracing::info!(
            actor_id = %actor_id,
            ?target,
            total_hours = summary.total_hours,
            "summary computed"
        );
        Ok(summary)
    }

    async fn worker_summary(
        &self,
        actor_id: &ActorId,
        worker_id: &ActorId,
        project_id: Option<&ProjectId>,
        month: Option<YearMonth>,
    ) -> Result<Summary, ApplicationError> {
        let requester = load_actor(&*self.store, actor_id).await?;
        let worker = self
            .store
            .actor(worker_id)
            .await?
            .ok_or(DecideError::NotFound)?;
        let candidates = match project_id {
            Some(id) => vec![self.store.project(id).await?.ok_or(DecideError::NotFound)?],
            None => self.store.projects_of(actor_id).await?,
        };
        let (projects, rate) = decide_worker_summary(&requester, &worker, project_id, candidates)?;

        let entries = self
            .store
            .datepoints(&DatePointQuery {
                worker_id: Some(worker_id.clone()),
                project_id: project_id.cloned(),
                month,
                ..Default::default()
            })
            .await?;
        let scope = SummaryScope::Worker {
            worker_id: worker_id.clone(),
            project_id: project_id.cloned(),
        };
        let summary = summarize(&scope, month, &entries, &projects, rate);
        tracing::info!(
            actor_id = %actor_id,
            worker_id = %worker_id,
            projects = projects.len(),
            total_hours = summary.total_hours,
            "worker summary computed"
        );
        Ok(summary)
    }
}
