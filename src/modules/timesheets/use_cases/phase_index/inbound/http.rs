use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::phase_index::PhaseIndexSnapshot;
use crate::shared::core::primitives::PhaseId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(phase_id): Path<PhaseId>,
) -> ApiResult<Json<PhaseIndexSnapshot>> {
    let snapshot = state.phase_index.handle(&actor_id, &phase_id).await?;
    Ok(Json(snapshot))
}
