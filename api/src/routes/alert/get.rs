use axum::{Json, extract::State};

use crate::response::ApiResponse;
use util::state::AppState;
use util::telemetry::Alert;

/// GET /api/alert
///
/// The most recent SOS alert, or `null` data with "No active alerts".
pub async fn get_alert(State(state): State<AppState>) -> Json<ApiResponse<Option<Alert>>> {
    match state.tracker().latest_alert().await {
        Some(alert) => Json(ApiResponse::success(Some(alert), "Active alert")),
        None => Json(ApiResponse::success(None, "No active alerts")),
    }
}

/// GET /api/alerts/history
///
/// The combined SOS/geofence timeline, newest first, at most 100 entries.
pub async fn get_history(State(state): State<AppState>) -> Json<ApiResponse<Vec<Alert>>> {
    let history = state.tracker().history().await;
    Json(ApiResponse::success(history, "Alert history retrieved"))
}
