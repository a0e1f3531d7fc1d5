use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::adapters::inbound::graphql::{acting_actor, to_gql_error};
use crate::modules::timesheets::core::phase_index::PhaseIndexSnapshot;
use crate::shared::core::primitives::PhaseId;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPhaseIndex {
    pub first_touched: String,
    pub last_touched: String,
    /// `YYYY-MM`, ascending.
    pub touched_months: Vec<String>,
}

impl From<PhaseIndexSnapshot> for GqlPhaseIndex {
    fn from(snapshot: PhaseIndexSnapshot) -> Self {
        Self {
            first_touched: snapshot.first_touched.to_string(),
            last_touched: snapshot.last_touched.to_string(),
            touched_months: snapshot
                .touched_months
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct PhaseIndexQuery;

#[Object]
impl PhaseIndexQuery {
    async fn phase_index(&self, context: &Context<'_>, phase_id: ID) -> GqlResult<GqlPhaseIndex> {
        let actor_id = acting_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .phase_index
            .handle(&actor_id, &PhaseId::from(phase_id.as_str()))
            .await
            .map_err(to_gql_error)?;
        Ok(snapshot.into())
    }
}
