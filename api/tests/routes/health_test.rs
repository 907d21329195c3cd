use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::app::{empty_request, make_test_app, response_json};

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}

#[tokio::test]
async fn db_health_pings_the_store() {
    let app = make_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/health/db"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Database reachable");
}
