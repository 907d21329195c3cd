use axum::{
    Router,
    body::Body,
    http::{Request, header::CONTENT_TYPE},
    response::Response,
};
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::{state::AppState, telemetry::AlertTracker};

use api::routes::routes;

/// Builds a test app over a fresh in-memory SQLite database and an empty
/// alert tracker. Each call is fully isolated.
pub async fn make_test_app() -> BoxCloneService<Request<Body>, Response, Infallible> {
    let db = db::test_utils::setup_test_db().await;
    let state = AppState::new(db, AlertTracker::new());

    let router = Router::new().nest("/api", routes(state));
    router.into_service().boxed_clone()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
