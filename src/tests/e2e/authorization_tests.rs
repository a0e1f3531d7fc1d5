use crate::shell::http::router;
use crate::tests::fixtures::http::{make_test_state, request, send};
use crate::tests::fixtures::store::{
    CLIENT, MANAGER, OTHER_MANAGER, OTHER_WORKER, OUTSIDER, ROLELESS, WORKER,
};
use axum::http::StatusCode;
use rstest::rstest;

const ACTORS: [&str; 7] = [
    MANAGER,
    OTHER_MANAGER,
    WORKER,
    OTHER_WORKER,
    OUTSIDER,
    CLIENT,
    ROLELESS,
];
const TARGETS: [(&str, &str); 8] = [
    ("project", "p-1"),
    ("phase", "ph-1"),
    ("task", "t-1"),
    ("datepoint", "d-1"),
    ("project", "p-2"),
    ("phase", "ph-2"),
    ("task", "t-3"),
    ("task", "t-404"),
];
const CAPABILITIES: [&str; 4] = ["view", "create_child", "edit", "approve"];

#[tokio::test]
async fn verdicts_are_stable_without_intervening_writes() {
    let app = router(make_test_state().await);
    for actor in ACTORS {
        for (kind, id) in TARGETS {
            for capability in CAPABILITIES {
                let uri = format!("/authorize?kind={kind}&id={id}&capability={capability}");
                let (_, first) = send(app.clone(), request("GET", &uri, Some(actor), None)).await;
                let (_, second) = send(app.clone(), request("GET", &uri, Some(actor), None)).await;
                assert_eq!(first, second, "{actor} {capability} {kind}:{id}");
            }
        }
    }
}

#[tokio::test]
async fn an_outsider_cannot_view_any_level_of_a_project() {
    let app = router(make_test_state().await);
    for (kind, id) in &TARGETS[..4] {
        let uri = format!("/authorize?kind={kind}&id={id}&capability=view");
        let (_, verdict) = send(app.clone(), request("GET", &uri, Some(OUTSIDER), None)).await;
        assert_eq!(verdict["verdict"], "deny", "{kind}:{id}");
    }
}

#[rstest]
#[case("GET", "/phases/ph-1/index", None)]
#[case("GET", "/phases/ph-1/datepoints", None)]
#[case("GET", "/summary?kind=task&id=t-1", None)]
#[case("PATCH", "/datepoints/d-1", Some(r#"{"worked_hours":2}"#))]
#[case(
    "POST",
    "/tasks/t-1/datepoints",
    Some(r#"{"title":"x","worked_date":"2024-03-10","worked_hours":2}"#)
)]
#[tokio::test]
async fn an_outsider_sees_foreign_entities_as_missing(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: Option<&str>,
) {
    let app = router(make_test_state().await);
    let (status, json) = send(app, request(method, uri, Some(OUTSIDER), body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[rstest]
#[case("GET", "/phases/ph-1/index")]
#[case("GET", "/projects/mine")]
#[case("POST", "/datepoints/d-1/approval/manager")]
#[tokio::test]
async fn an_actor_without_a_role_is_always_denied(#[case] method: &str, #[case] uri: &str) {
    let app = router(make_test_state().await);
    let (status, _) = send(app, request(method, uri, Some(ROLELESS), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn a_fellow_worker_may_read_but_not_edit_an_entry() {
    let app = router(make_test_state().await);
    let (status, _) = send(
        app.clone(),
        request("GET", "/phases/ph-1/datepoints", Some(OTHER_WORKER), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        app,
        request(
            "PATCH",
            "/datepoints/d-1",
            Some(OTHER_WORKER),
            Some(r#"{"worked_hours":2}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "AUTHORIZATION_DENIED");
}
