use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{empty_request, json_request, make_test_app, response_json};

#[tokio::test]
async fn breach_sets_flag_and_clear_resets_it() {
    let app = make_test_app().await;

    let status = app
        .clone()
        .oneshot(empty_request("GET", "/api/fence"))
        .await
        .unwrap();
    let status = response_json(status).await;
    assert_eq!(status["data"]["breach"], false);

    // A breach report may arrive with no body at all.
    let breach = app
        .clone()
        .oneshot(empty_request("POST", "/api/fence/breach"))
        .await
        .unwrap();
    assert_eq!(breach.status(), StatusCode::OK);
    let breach = response_json(breach).await;
    assert_eq!(breach["data"]["type"], "GEOFENCE");
    assert_eq!(breach["data"]["device_id"], "unknown");

    let status = app
        .clone()
        .oneshot(empty_request("GET", "/api/fence"))
        .await
        .unwrap();
    let status = response_json(status).await;
    assert_eq!(status["data"]["breach"], true);

    let cleared = app
        .clone()
        .oneshot(empty_request("POST", "/api/fence/clear"))
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::OK);

    let status = app
        .oneshot(empty_request("GET", "/api/fence"))
        .await
        .unwrap();
    let status = response_json(status).await;
    assert_eq!(status["data"]["breach"], false);
}

#[tokio::test]
async fn gps_requires_a_payload_and_overwrites() {
    let app = make_test_app().await;

    let rejected = app
        .clone()
        .oneshot(json_request("POST", "/api/gps", json!({})))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    let rejected = response_json(rejected).await;
    assert_eq!(rejected["message"], "GPS data is required");

    for fix in ["12.5,77.6", "13.0,78.0"] {
        let stored = app
            .clone()
            .oneshot(json_request("POST", "/api/gps", json!({"gps": fix})))
            .await
            .unwrap();
        assert_eq!(stored.status(), StatusCode::OK);
    }

    let fetched = app
        .oneshot(empty_request("GET", "/api/gps"))
        .await
        .unwrap();
    let fetched = response_json(fetched).await;
    assert_eq!(fetched["data"], "13.0,78.0");
}

#[tokio::test]
async fn gps_starts_empty() {
    let app = make_test_app().await;

    let fetched = app
        .oneshot(empty_request("GET", "/api/gps"))
        .await
        .unwrap();
    let fetched = response_json(fetched).await;
    assert!(fetched["data"].is_null());
    assert_eq!(fetched["message"], "No GPS fix recorded");
}
