use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::use_cases::create_datepoint::command::CreateDatePoint;
use crate::shared::core::primitives::{DatePointId, TaskId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateDatePointBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub worked_date: String,
    pub worked_hours: i64,
}

#[derive(Serialize)]
pub struct CreateDatePointResponse {
    pub datepoint_id: DatePointId,
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(task_id): Path<TaskId>,
    body: Result<Json<CreateDatePointBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let command = CreateDatePoint {
        datepoint_id: DatePointId::generate(),
        task_id,
        title: body.title,
        description: body.description,
        worked_date: body.worked_date,
        worked_hours: body.worked_hours,
        requested_at: Utc::now().timestamp_millis(),
    };

    let datepoint_id = state.create_datepoint.handle(&actor_id, command).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateDatePointResponse { datepoint_id }),
    ))
}
