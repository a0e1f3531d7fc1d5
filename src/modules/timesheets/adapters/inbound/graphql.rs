use crate::modules::timesheets::adapters::inbound::http::ActingActor;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::ActorId;
use async_graphql::{Context, Error, ErrorExtensions, Result as GqlResult};

/// The acting actor is attached to the request data by the `/gql` endpoint.
pub fn acting_actor(context: &Context<'_>) -> GqlResult<ActorId> {
    context
        .data_opt::<ActingActor>()
        .map(|actor| actor.0.clone())
        .ok_or_else(|| {
            Error::new("missing x-actor-id header").extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
        })
}

pub fn to_gql_error(error: ApplicationError) -> Error {
    let code = error.code();
    let message = match &error {
        ApplicationError::Store(_) => "An internal error occurred".to_string(),
        _ => error.to_string(),
    };
    Error::new(message).extend_with(|_, e| e.set("code", code))
}
