use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{empty_request, json_request, make_test_app, response_json};

#[tokio::test]
async fn first_scan_is_inserted() {
    let app = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendance",
            json!({"uid": "A1", "name": "Sam"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "inserted");
    assert_eq!(body["data"]["record"]["uid"], "A1");
    assert_eq!(body["data"]["record"]["name"], "Sam");
}

#[tokio::test]
async fn repeat_scan_inside_cooldown_is_deduplicated() {
    let app = make_test_app().await;

    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/attendance",
            json!({"uid": "A1", "name": "Sam"}),
        ))
        .await
        .unwrap();
    let first_body = response_json(first).await;
    let first_ts = first_body["data"]["record"]["timestamp"]
        .as_str()
        .unwrap()
        .to_owned();

    // Default cooldown is 60s, so an immediate repeat must be suppressed.
    let second = app
        .oneshot(json_request(
            "POST",
            "/api/attendance",
            json!({"uid": "A1", "name": "Sam"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let second_body = response_json(second).await;
    assert_eq!(second_body["data"]["status"], "deduplicated");
    assert_eq!(second_body["data"]["last_scan"], first_ts.as_str());
    assert!(second_body["data"]["record"].is_null());
}

#[tokio::test]
async fn missing_fields_are_named_in_the_error() {
    let app = make_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/attendance", json!({"uid": "A1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields: name");

    // An empty uid counts as missing too, and nothing was stored.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/attendance",
            json!({"uid": "  ", "name": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Missing required fields: uid, name");

    let list = app
        .oneshot(empty_request("GET", "/api/attendance"))
        .await
        .unwrap();
    let body = response_json(list).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_endpoints_return_scans() {
    let app = make_test_app().await;

    for (uid, name) in [("A1", "Sam"), ("B2", "Ida")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/attendance",
                json!({"uid": uid, "name": name}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = app
        .clone()
        .oneshot(empty_request("GET", "/api/attendance"))
        .await
        .unwrap();
    let body = response_json(list).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let latest = app
        .clone()
        .oneshot(empty_request("GET", "/api/attendance/latest"))
        .await
        .unwrap();
    let body = response_json(latest).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let history = app
        .clone()
        .oneshot(empty_request("GET", "/api/attendance/history/A1"))
        .await
        .unwrap();
    let body = response_json(history).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["uid"], "A1");

    // Unknown uid: empty list, not an error.
    let unknown = app
        .oneshot(empty_request("GET", "/api/attendance/history/nope"))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::OK);
    let body = response_json(unknown).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
