use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::aggregation::{Summary, SummaryScope};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::summarize::query::Summarize;
use crate::shared::core::primitives::{ProjectId, YearMonth};
use crate::shell::state::AppState;

/// `kind` is one of `task`, `phase`, `project` or `worker`. `project` narrows a
/// worker summary to one project.
#[derive(Deserialize)]
pub struct SummaryParams {
    pub kind: String,
    pub id: String,
    pub project: Option<ProjectId>,
    pub month: Option<YearMonth>,
}

fn scope_of(params: &SummaryParams) -> Result<SummaryScope, ApplicationError> {
    let id = params.id.as_str();
    let scope = match params.kind.as_str() {
        "task" => SummaryScope::Task { task_id: id.into() },
        "phase" => SummaryScope::Phase {
            phase_id: id.into(),
        },
        "project" => SummaryScope::Project {
            project_id: id.into(),
        },
        "worker" => SummaryScope::Worker {
            worker_id: id.into(),
            project_id: params.project.clone(),
        },
        other => {
            return Err(DecideError::invalid(format!("unknown summary scope `{other}`")).into());
        }
    };
    Ok(scope)
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> ApiResult<Json<Summary>> {
    let Query(params) = params?;
    let query = Summarize {
        scope: scope_of(&params)?,
        month: params.month,
    };
    let summary = state.summarize.handle(&actor_id, query).await?;
    Ok(Json(summary))
}
