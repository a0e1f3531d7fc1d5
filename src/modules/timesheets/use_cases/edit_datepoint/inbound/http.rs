use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::use_cases::edit_datepoint::command::EditDatePoint;
use crate::shared::core::primitives::DatePointId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditDatePointBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub worked_date: Option<String>,
    pub worked_hours: Option<i64>,
}

#[derive(Serialize)]
pub struct EditDatePointResponse {
    pub datepoint_id: DatePointId,
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(datepoint_id): Path<DatePointId>,
    body: Result<Json<EditDatePointBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let command = EditDatePoint {
        datepoint_id: datepoint_id.clone(),
        title: body.title,
        description: body.description,
        worked_date: body.worked_date,
        worked_hours: body.worked_hours,
        requested_at: Utc::now().timestamp_millis(),
    };

    let version = state.edit_datepoint.handle(&actor_id, command).await?;
    Ok(Json(EditDatePointResponse {
        datepoint_id,
        version,
    }))
}
