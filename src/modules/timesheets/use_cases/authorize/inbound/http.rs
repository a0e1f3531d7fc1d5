use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::access::{Capability, Verdict};
use crate::modules::timesheets::core::errors::DecideError;
use crate::modules::timesheets::core::hierarchy::EntityRef;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AuthorizeParams {
    pub kind: String,
    pub id: String,
    pub capability: Capability,
}

fn target_of(kind: &str, id: &str) -> Result<EntityRef, ApplicationError> {
    let target = match kind {
        "project" => EntityRef::Project(id.into()),
        "phase" => EntityRef::Phase(id.into()),
        "task" => EntityRef::Task(id.into()),
        "datepoint" => EntityRef::DatePoint(id.into()),
        other => {
            return Err(DecideError::invalid(format!("unknown entity kind `{other}`")).into());
        }
    };
    Ok(target)
}

pub async fn handle(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    params: Result<Query<AuthorizeParams>, QueryRejection>,
) -> ApiResult<Json<Verdict>> {
    let Query(params) = params?;
    let target = target_of(&params.kind, &params.id)?;
    let verdict = state
        .authorize
        .handle(&actor_id, &target, params.capability)
        .await?;
    Ok(Json(verdict))
}
