use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::timesheets::adapters::inbound::http::{ActingActor, ApiError};
use crate::modules::timesheets::use_cases::create_datepoint::inbound::graphql::CreateDatePointMutation;
use crate::modules::timesheets::use_cases::list_projects::inbound::graphql::MyProjectsQuery;
use crate::modules::timesheets::use_cases::phase_index::inbound::graphql::PhaseIndexQuery;
use crate::modules::timesheets::use_cases::summarize::inbound::graphql::SummaryQuery;
use crate::modules::timesheets::use_cases::toggle_approval::inbound::graphql::ToggleApprovalMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(SummaryQuery, PhaseIndexQuery, MyProjectsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateDatePointMutation, ToggleApprovalMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Resolvers reject the request themselves when no actor header was sent.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Result<ActingActor, ApiError>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Ok(actor) = actor {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::shared::core::primitives::ActorId;
    use crate::tests::fixtures::http::make_test_state;
    use crate::tests::fixtures::store::{CLIENT, MANAGER, WORKER};
    use async_graphql::Request;
    use serde_json::json;

    async fn execute(actor: Option<&str>, query: &str) -> async_graphql::Response {
        let schema = build_schema(make_test_state().await);
        let mut request = Request::new(query);
        if let Some(actor) = actor {
            request = request.data(ActingActor(ActorId::from(actor)));
        }
        schema.execute(request).await
    }

    #[tokio::test]
    async fn it_should_list_my_projects() {
        let response = execute(Some(CLIENT), "{ myProjects { id title clientName } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "myProjects": [{ "id": "p-2", "title": "Harbour wall", "clientName": "Port Authority" }] })
        );
    }

    #[tokio::test]
    async fn it_should_read_the_phase_index() {
        let response = execute(
            Some(WORKER),
            r#"{ phaseIndex(phaseId: "ph-1") { firstTouched touchedMonths } }"#,
        )
        .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({ "phaseIndex": { "firstTouched": "2024-02-12", "touchedMonths": ["2024-02"] } })
        );
    }

    #[tokio::test]
    async fn it_should_toggle_then_summarize() {
        let schema = build_schema(make_test_state().await);
        let manager = ActorId::from(MANAGER);
        let toggled = schema
            .execute(
                Request::new(r#"mutation { toggleApproval(datepointId: "d-1", slot: MANAGER) }"#)
                    .data(ActingActor(manager.clone())),
            )
            .await;
        assert!(toggled.errors.is_empty(), "{:?}", toggled.errors);

        let summary = schema
            .execute(
                Request::new(r#"{ summary(kind: PROJECT, id: "p-1") { totalHours totalPay rateSource } }"#)
                    .data(ActingActor(manager)),
            )
            .await;
        assert_eq!(
            summary.data.into_json().unwrap(),
            json!({ "summary": { "totalHours": 4, "totalPay": 40, "rateSource": "project_billing" } })
        );
    }

    #[tokio::test]
    async fn it_should_carry_the_error_code_as_an_extension() {
        let response = execute(
            Some(WORKER),
            r#"mutation { toggleApproval(datepointId: "d-1", slot: CLIENT) }"#,
        )
        .await;
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "NOT_APPLICABLE");
    }

    #[tokio::test]
    async fn it_should_reject_anonymous_requests() {
        let response = execute(None, "{ myProjects { id } }").await;
        let error = serde_json::to_value(&response.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "UNAUTHENTICATED");
    }
}
