use axum::{
    Extension, Router,
    routing::{get, patch, post, put},
};

use crate::modules::timesheets::use_cases::authorize::inbound::http as authorize_http;
use crate::modules::timesheets::use_cases::create_datepoint::inbound::http as create_datepoint_http;
use crate::modules::timesheets::use_cases::edit_datepoint::inbound::http as edit_datepoint_http;
use crate::modules::timesheets::use_cases::end_lifecycle::inbound::http as end_lifecycle_http;
use crate::modules::timesheets::use_cases::list_datepoints::inbound::http as list_datepoints_http;
use crate::modules::timesheets::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::timesheets::use_cases::manage_hierarchy::inbound::http as hierarchy_http;
use crate::modules::timesheets::use_cases::phase_index::inbound::http as phase_index_http;
use crate::modules::timesheets::use_cases::summarize::inbound::http as summarize_http;
use crate::modules::timesheets::use_cases::toggle_approval::inbound::http as toggle_approval_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/projects", post(hierarchy_http::create_project))
        .route("/projects/mine", get(list_projects_http::handle))
        .route("/projects/{project_id}/phases", post(hierarchy_http::add_phase))
        .route("/projects/{project_id}/members", put(hierarchy_http::assign_members))
        .route("/projects/{project_id}/end", post(end_lifecycle_http::end_project))
        .route("/phases/{phase_id}/tasks", post(hierarchy_http::add_task))
        .route("/phases/{phase_id}/end", post(end_lifecycle_http::end_phase))
        .route("/phases/{phase_id}/index", get(phase_index_http::handle))
        .route("/phases/{phase_id}/datepoints", get(list_datepoints_http::handle))
        .route("/tasks/{task_id}/datepoints", post(create_datepoint_http::handle))
        .route("/datepoints/{datepoint_id}", patch(edit_datepoint_http::handle))
        .route(
            "/datepoints/{datepoint_id}/approval/{slot}",
            post(toggle_approval_http::handle),
        )
        .route("/summary", get(summarize_http::handle))
        .route("/authorize", get(authorize_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
