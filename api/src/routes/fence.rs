use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use util::state::AppState;
use util::telemetry::Alert;

pub fn fence_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_fence))
        .route("/breach", post(report_breach))
        .route("/clear", post(clear_fence))
}

/// Body of `POST /api/fence/breach`. Everything is optional; the body itself
/// may be absent entirely.
#[derive(Debug, Default, Deserialize)]
pub struct BreachRequest {
    pub device_id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Default, Serialize)]
pub struct FenceStatus {
    pub breach: bool,
}

/// POST /api/fence/breach
///
/// Raises the geofence breach flag and appends a GEOFENCE entry to the alert
/// history. A device that cannot attach its id is recorded as "unknown".
/// Idempotent on the flag; every call appends its own history entry.
pub async fn report_breach(
    State(state): State<AppState>,
    body: Option<Json<BreachRequest>>,
) -> Json<ApiResponse<Alert>> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let alert = state
        .tracker()
        .report_breach(body.device_id, body.lat, body.lon)
        .await;
    tracing::warn!(device_id = %alert.device_id, "Geofence breach reported");

    Json(ApiResponse::success(alert, "Geofence breach recorded"))
}

/// GET /api/fence
///
/// Current breach flag as `{"breach": bool}`.
pub async fn get_fence(State(state): State<AppState>) -> Json<ApiResponse<FenceStatus>> {
    let breach = state.tracker().fence_breached().await;
    Json(ApiResponse::success(
        FenceStatus { breach },
        "Geofence status retrieved",
    ))
}

/// POST /api/fence/clear
///
/// Lowers the breach flag.
pub async fn clear_fence(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.tracker().clear_fence().await;
    Json(ApiResponse::success((), "Geofence cleared"))
}
