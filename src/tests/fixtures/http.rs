// Helpers for driving inbound adapters in tests.

use crate::modules::timesheets::adapters::inbound::http::ACTOR_HEADER;
use crate::shell::state::AppState;
use crate::tests::fixtures::store::seeded;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn make_test_state() -> AppState {
    AppState::new(Arc::new(seeded().await))
}

pub async fn make_offline_store_state() -> AppState {
    let mut store = seeded().await;
    store.toggle_offline();
    AppState::new(Arc::new(store))
}

pub fn request(method: &str, uri: &str, actor: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header(ACTOR_HEADER, actor);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and returns the status with the JSON body, `Null` when empty.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
