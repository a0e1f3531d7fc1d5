use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiResult};
use crate::modules::timesheets::core::hierarchy::ClientDetail;
use crate::modules::timesheets::use_cases::manage_hierarchy::command::{
    AddPhase, AddTask, AssignMembers, CreateProject,
};
use crate::shared::core::primitives::{ActorId, PhaseId, ProjectId, TaskId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub workers: Vec<ActorId>,
    #[serde(default)]
    pub clients: Vec<ActorId>,
    pub hourly_rate: Option<u32>,
    pub client_detail: Option<ClientDetail>,
}

#[derive(Deserialize)]
pub struct AddPhaseBody {
    pub title: String,
}

#[derive(Deserialize)]
pub struct AddTaskBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct AssignMembersBody {
    #[serde(default)]
    pub workers: Vec<ActorId>,
    #[serde(default)]
    pub clients: Vec<ActorId>,
}

#[derive(Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub id: T,
}

pub async fn create_project(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let command = CreateProject {
        project_id: ProjectId::generate(),
        title: body.title,
        description: body.description,
        workers: body.workers,
        clients: body.clients,
        hourly_rate: body.hourly_rate,
        client_detail: body.client_detail,
    };
    let id = state.hierarchy.create_project(&actor_id, command).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn add_phase(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(project_id): Path<ProjectId>,
    body: Result<Json<AddPhaseBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let command = AddPhase {
        phase_id: PhaseId::generate(),
        project_id,
        title: body.title,
        created_on: Utc::now().date_naive(),
    };
    let id = state.hierarchy.add_phase(&actor_id, command).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn add_task(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(phase_id): Path<PhaseId>,
    body: Result<Json<AddTaskBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let command = AddTask {
        task_id: TaskId::generate(),
        phase_id,
        title: body.title,
        description: body.description,
    };
    let id = state.hierarchy.add_task(&actor_id, command).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn assign_members(
    State(state): State<AppState>,
    ActingActor(actor_id): ActingActor,
    Path(project_id): Path<ProjectId>,
    body: Result<Json<AssignMembersBody>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(body) = body?;
    let command = AssignMembers {
        project_id,
        workers: body.workers,
        clients: body.clients,
    };
    state.hierarchy.assign_members(&actor_id, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
