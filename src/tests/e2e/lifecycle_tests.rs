use crate::shell::http::router;
use crate::tests::fixtures::http::{make_test_state, request, send};
use crate::tests::fixtures::store::{MANAGER, WORKER};
use axum::http::StatusCode;

const ENTRY: &str = r#"{"title":"Late work","worked_date":"2024-03-10","worked_hours":2}"#;

#[tokio::test]
async fn ending_a_project_locks_every_task_below_it() {
    let app = router(make_test_state().await);
    let (status, _) = send(
        app.clone(),
        request("POST", "/projects/p-1/end", Some(MANAGER), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for task in ["t-1", "t-2"] {
        let (status, json) = send(
            app.clone(),
            request("POST", &format!("/tasks/{task}/datepoints"), Some(WORKER), Some(ENTRY)),
        )
        .await;
        assert_eq!(status, StatusCode::LOCKED);
        assert_eq!(json["error"], "locked: project has ended");
    }

    let (status, _) = send(
        app.clone(),
        request("POST", "/datepoints/d-1/approval/manager", Some(MANAGER), None),
    )
    .await;
    assert_eq!(status, StatusCode::LOCKED);

    let (status, _) = send(
        app.clone(),
        request(
            "POST",
            "/projects/p-1/phases",
            Some(MANAGER),
            Some(r#"{"title":"Repaint"}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::LOCKED);
}

#[tokio::test]
async fn ending_a_phase_leaves_other_projects_open() {
    let app = router(make_test_state().await);
    send(app.clone(), request("POST", "/phases/ph-1/end", Some(MANAGER), None)).await;

    let (status, _) = send(
        app.clone(),
        request("POST", "/tasks/t-1/datepoints", Some(WORKER), Some(ENTRY)),
    )
    .await;
    assert_eq!(status, StatusCode::LOCKED);

    let (status, _) = send(
        app.clone(),
        request("POST", "/tasks/t-3/datepoints", Some(WORKER), Some(ENTRY)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn ending_twice_succeeds_both_times() {
    let app = router(make_test_state().await);
    for _ in 0..2 {
        let (status, _) = send(
            app.clone(),
            request("POST", "/phases/ph-2/end", Some(MANAGER), None),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
