use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::adapters::inbound::graphql::{acting_actor, to_gql_error};
use crate::modules::timesheets::core::hierarchy::Project;
use crate::shared::core::primitives::ActorId;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlProject {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub manager: ID,
    pub workers: Vec<ID>,
    pub clients: Vec<ID>,
    pub ongoing: bool,
    pub hourly_rate: Option<u32>,
    pub client_name: Option<String>,
}

fn to_ids(actors: Vec<ActorId>) -> Vec<ID> {
    actors.into_iter().map(|id| ID(id.to_string())).collect()
}

impl From<Project> for GqlProject {
    fn from(project: Project) -> Self {
        Self {
            id: ID(project.id.to_string()),
            title: project.title,
            description: project.description,
            manager: ID(project.manager.to_string()),
            workers: to_ids(project.workers),
            clients: to_ids(project.clients),
            ongoing: project.ongoing,
            hourly_rate: project.hourly_rate,
            client_name: project.client_detail.map(|detail| detail.name),
        }
    }
}

#[derive(Default)]
pub struct MyProjectsQuery;

#[Object]
impl MyProjectsQuery {
    async fn my_projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let actor_id = acting_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let projects = state
            .list_projects
            .handle(&actor_id)
            .await
            .map_err(to_gql_error)?;
        Ok(projects.into_iter().map(Into::into).collect())
    }
}
