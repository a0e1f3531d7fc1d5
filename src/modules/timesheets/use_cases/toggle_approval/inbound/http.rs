use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::approval::ApprovalSlot;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::toggle_approval::command::ToggleApproval;
use crate::shared::core::primitives::DatePointId;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ToggleApprovalResponse {
    pub datepoint_id: DatePointId,
    pub slot: ApprovalSlot,
    pub approved: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path((datepoint_id, slot)): Path<(DatePointId, String)>,
) -> ApiResult<impl IntoResponse> {
    let slot: ApprovalSlot = slot.parse().map_err(ApplicationError::Rejected)?;
    let command = ToggleApproval {
        datepoint_id: datepoint_id.clone(),
        slot,
        requested_at: Utc::now().timestamp_millis(),
    };

    let approved = state.toggle_approval.handle(&actor_id, command).await?;
    Ok(Json(ToggleApprovalResponse {
        datepoint_id,
        slot,
        approved,
    }))
}
