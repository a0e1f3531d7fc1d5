use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::use_cases::list_datepoints::decide::DatePointRow;
use crate::modules::timesheets::use_cases::list_datepoints::query::ListDatePoints;
use crate::shared::core::primitives::{ActorId, PhaseId, TaskId, YearMonth};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListDatePointsParams {
    pub worker: Option<ActorId>,
    pub task: Option<TaskId>,
    pub month: Option<YearMonth>,
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(phase_id): Path<PhaseId>,
    params: Result<Query<ListDatePointsParams>, QueryRejection>,
) -> ApiResult<Json<Vec<DatePointRow>>> {
    let Query(params) = params?;
    let query = ListDatePoints {
        phase_id,
        worker_id: params.worker,
        task_id: params.task,
        month: params.month,
    };
    let rows = state.list_datepoints.handle(&actor_id, query).await?;
    Ok(Json(rows))
}
