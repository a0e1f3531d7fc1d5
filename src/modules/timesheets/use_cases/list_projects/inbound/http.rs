use axum::{Json, extract::State};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::hierarchy::Project;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.list_projects.handle(&actor_id).await?;
    Ok(Json(projects))
}
