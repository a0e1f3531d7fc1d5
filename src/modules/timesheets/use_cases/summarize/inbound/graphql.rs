use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::adapters::inbound::graphql::{acting_actor, to_gql_error};
use crate::modules::timesheets::core::aggregation::{RateSource, Summary, SummaryScope};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::summarize::query::Summarize;
use crate::shared::core::primitives::{ProjectId, YearMonth};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlSummaryKind {
    Task,
    Phase,
    Project,
    Worker,
}

#[derive(SimpleObject, Clone)]
pub struct GqlBucket {
    pub key: String,
    pub hours: u32,
}

#[derive(SimpleObject, Clone)]
pub struct GqlSummary {
    pub month: Option<String>,
    pub buckets: Vec<GqlBucket>,
    pub total_hours: u32,
    /// `project_billing` or `worker_pay`.
    pub rate_source: String,
    pub rate_per_hour: Option<u32>,
    pub total_pay: Option<u64>,
}

impl From<Summary> for GqlSummary {
    fn from(summary: Summary) -> Self {
        Self {
            month: summary.month.map(|m| m.to_string()),
            buckets: summary
                .per_bucket_hours
                .into_iter()
                .map(|(key, hours)| GqlBucket {
                    key: key.to_string(),
                    hours,
                })
                .collect(),
            total_hours: summary.total_hours,
            rate_source: match summary.rate.source {
                RateSource::ProjectBilling => "project_billing".into(),
                RateSource::WorkerPay => "worker_pay".into(),
            },
            rate_per_hour: summary.rate.per_hour,
            total_pay: summary.total_pay,
        }
    }
}

#[derive(Default)]
pub struct SummaryQuery;

#[Object]
impl SummaryQuery {
    /// `project_id` only narrows worker summaries. `month` is `YYYY-MM`.
    async fn summary(
        &self,
        context: &Context<'_>,
        kind: GqlSummaryKind,
        id: ID,
        project_id: Option<ID>,
        month: Option<String>,
    ) -> GqlResult<GqlSummary> {
        let actor_id = acting_actor(context)?;
        let state = context.data_unchecked::<AppState>();

        let month = month
            .map(|raw| raw.parse::<YearMonth>())
            .transpose()
            .map_err(|e| to_gql_error(ApplicationError::Rejected(DecideError::invalid(e.to_string()))))?;
        let id = id.as_str();
        let scope = match kind {
            GqlSummaryKind::Task => SummaryScope::Task { task_id: id.into() },
            GqlSummaryKind::Phase => SummaryScope::Phase {
                phase_id: id.into(),
            },
            GqlSummaryKind::Project => SummaryScope::Project {
                project_id: id.into(),
            },
            GqlSummaryKind::Worker => SummaryScope::Worker {
                worker_id: id.into(),
                project_id: project_id.map(|p| ProjectId::from(p.as_str())),
            },
        };

        let summary = state
            .summarize
            .handle(&actor_id, Summarize { scope, month })
            .await
            .map_err(to_gql_error)?;
        Ok(summary.into())
    }
}
