use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;

use crate::response::ApiResponse;
use util::state::AppState;

pub fn gps_routes() -> Router<AppState> {
    Router::new().route("/", post(record_gps).get(get_gps))
}

#[derive(Debug, Deserialize)]
pub struct GpsRequest {
    pub gps: Option<String>,
}

/// POST /api/gps
///
/// Stores the latest GPS fix, overwriting the previous one. The payload is
/// treated as opaque; only presence is validated. No history is kept.
pub async fn record_gps(
    State(state): State<AppState>,
    Json(body): Json<GpsRequest>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let payload = body.gps.map(|g| g.trim().to_owned()).unwrap_or_default();
    if payload.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("GPS data is required")),
        );
    }

    state.tracker().record_gps(payload).await;
    (
        StatusCode::OK,
        Json(ApiResponse::success((), "GPS stored successfully")),
    )
}

/// GET /api/gps
///
/// The latest GPS fix, or `null` data if none has been reported.
pub async fn get_gps(State(state): State<AppState>) -> Json<ApiResponse<Option<String>>> {
    match state.tracker().latest_gps().await {
        Some(gps) => Json(ApiResponse::success(Some(gps), "Latest GPS fix")),
        None => Json(ApiResponse::success(None, "No GPS fix recorded")),
    }
}
