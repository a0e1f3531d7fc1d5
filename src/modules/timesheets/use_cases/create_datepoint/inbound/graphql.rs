use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::timesheets::adapters::inbound::graphql::{acting_actor, to_gql_error};
use crate::modules::timesheets::use_cases::create_datepoint::command::CreateDatePoint;
use crate::shared::core::primitives::{DatePointId, TaskId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateDatePointMutation;

#[Object]
impl CreateDatePointMutation {
    async fn create_date_point(
        &self,
        context: &Context<'_>,
        task_id: ID,
        title: String,
        description: Option<String>,
        worked_date: String,
        worked_hours: i64,
    ) -> GqlResult<ID> {
        let actor_id = acting_actor(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = CreateDatePoint {
            datepoint_id: DatePointId::generate(),
            task_id: TaskId::from(task_id.as_str()),
            title,
            description: description.unwrap_or_default(),
            worked_date,
            worked_hours,
            requested_at: Utc::now().timestamp_millis(),
        };

        let datepoint_id = state
            .create_datepoint
            .handle(&actor_id, command)
            .await
            .map_err(to_gql_error)?;
        Ok(ID(datepoint_id.to_string()))
    }
}
