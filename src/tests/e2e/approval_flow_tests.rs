use crate::shell::http::router;
use crate::tests::fixtures::http::{make_test_state, request, send};
use crate::tests::fixtures::store::{CLIENT, MANAGER, WORKER};
use axum::Router;
use axum::http::StatusCode;

async fn app() -> Router {
    router(make_test_state().await)
}

async fn create(app: &Router, task: &str, date: &str, hours: u8) -> String {
    let body = format!(
        r#"{{"title":"Site work","worked_date":"{date}","worked_hours":{hours}}}"#
    );
    let (status, json) = send(
        app.clone(),
        request("POST", &format!("/tasks/{task}/datepoints"), Some(WORKER), Some(&body)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["datepoint_id"].as_str().unwrap().to_string()
}

async fn toggle(app: &Router, actor: &str, datepoint: &str, slot: &str) -> (StatusCode, serde_json::Value) {
    send(
        app.clone(),
        request(
            "POST",
            &format!("/datepoints/{datepoint}/approval/{slot}"),
            Some(actor),
            None,
        ),
    )
    .await
}

async fn summary(app: &Router, uri: &str) -> serde_json::Value {
    let (status, json) = send(app.clone(), request("GET", uri, Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json
}

#[tokio::test]
async fn hours_count_once_the_manager_signs_off_on_a_project_without_clients() {
    let app = app().await;
    let datepoint = create(&app, "t-1", "2024-03-10", 5).await;

    let before = summary(&app, "/summary?kind=project&id=p-1").await;
    assert_eq!(before["total_hours"], 0);

    let (status, json) = toggle(&app, MANAGER, &datepoint, "manager").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["approved"], true);

    let after = summary(&app, "/summary?kind=project&id=p-1").await;
    assert_eq!(after["total_hours"], 5);
    assert_eq!(after["total_pay"], 50);
}

#[tokio::test]
async fn hours_need_both_sign_offs_on_a_project_with_clients() {
    let app = app().await;
    let datepoint = create(&app, "t-3", "2024-04-01", 3).await;

    let (status, _) = toggle(&app, MANAGER, &datepoint, "manager").await;
    assert_eq!(status, StatusCode::OK);
    let (_, rows) = send(
        app.clone(),
        request("GET", "/phases/ph-2/datepoints", Some(CLIENT), None),
    )
    .await;
    assert_eq!(rows[0]["approval"], "manager_approved");
    assert_eq!(rows[0]["counts_toward_total"], false);
    assert_eq!(
        summary(&app, "/summary?kind=project&id=p-2&month=2024-04").await["total_hours"],
        0
    );

    let (status, _) = toggle(&app, CLIENT, &datepoint, "client").await;
    assert_eq!(status, StatusCode::OK);
    let april = summary(&app, "/summary?kind=project&id=p-2&month=2024-04").await;
    assert_eq!(april["total_hours"], 3);
    assert_eq!(april["total_pay"], 60);
    assert_eq!(
        summary(&app, "/summary?kind=project&id=p-2&month=2024-05").await["total_hours"],
        0
    );
}

#[tokio::test]
async fn an_edit_withdraws_the_manager_sign_off() {
    let app = app().await;
    let datepoint = create(&app, "t-1", "2024-03-10", 5).await;
    toggle(&app, MANAGER, &datepoint, "manager").await;

    let (status, _) = send(
        app.clone(),
        request(
            "PATCH",
            &format!("/datepoints/{datepoint}"),
            Some(WORKER),
            Some(r#"{"worked_hours":6}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        summary(&app, "/summary?kind=project&id=p-1").await["total_hours"],
        0
    );
}

#[tokio::test]
async fn a_client_sign_off_freezes_the_content() {
    let app = app().await;
    let datepoint = create(&app, "t-3", "2024-04-01", 3).await;
    toggle(&app, CLIENT, &datepoint, "client").await;

    let (status, json) = send(
        app.clone(),
        request(
            "PATCH",
            &format!("/datepoints/{datepoint}"),
            Some(WORKER),
            Some(r#"{"worked_hours":1}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::LOCKED);
    assert_eq!(json["code"], "LIFECYCLE_LOCKED");

    let (_, rows) = send(
        app.clone(),
        request("GET", "/phases/ph-2/datepoints", Some(WORKER), None),
    )
    .await;
    assert_eq!(rows[0]["worked_hours"], 3);
    assert_eq!(rows[0]["approval"], "client_approved");
}

#[tokio::test]
async fn the_client_slot_does_not_exist_without_clients() {
    let app = app().await;
    let (status, json) = toggle(&app, MANAGER, "d-1", "client").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "NOT_APPLICABLE");
}
