use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::use_cases::end_lifecycle::command::EndLifecycle;
use crate::shared::core::primitives::{PhaseId, ProjectId};
use crate::shell::state::AppState;

pub async fn end_phase(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(phase_id): Path<PhaseId>,
) -> ApiResult<StatusCode> {
    state
        .end_lifecycle
        .handle(&actor_id, EndLifecycle::Phase(phase_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn end_project(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(project_id): Path<ProjectId>,
) -> ApiResult<StatusCode> {
    state
        .end_lifecycle
        .handle(&actor_id, EndLifecycle::Project(project_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
