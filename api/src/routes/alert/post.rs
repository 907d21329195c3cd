use axum::{Json, extract::State, http::StatusCode};

use crate::response::ApiResponse;
use util::state::AppState;
use util::telemetry::Alert;

use super::common::SosRequest;

/// POST /api/alert
///
/// Records an SOS alert from a tracking device. `device_id`, `lat` and `lon`
/// are all required (zero coordinates are rejected as missing); on failure
/// nothing is recorded. On success the constructed alert becomes the active
/// alert, joins the history and is echoed back.
pub async fn report_alert(
    State(state): State<AppState>,
    Json(body): Json<SosRequest>,
) -> (StatusCode, Json<ApiResponse<Option<Alert>>>) {
    let device_id = body.device_id.as_deref().map(str::trim).unwrap_or_default();
    let lat = body.lat.unwrap_or(0.0);
    let lon = body.lon.unwrap_or(0.0);

    if device_id.is_empty() || lat == 0.0 || lon == 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing device_id, lat, or lon")),
        );
    }

    let alert = state.tracker().report_sos(device_id, lat, lon).await;
    tracing::warn!(device_id = %alert.device_id, lat, lon, "SOS alert received");

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(alert), "Alert received")),
    )
}

/// POST /api/alert/clear
///
/// Clears the active SOS alert. The history keeps its entries.
pub async fn clear_alert(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.tracker().clear_alert().await;
    Json(ApiResponse::success((), "Alert cleared"))
}
