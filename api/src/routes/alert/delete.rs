use axum::{Json, extract::State};

use crate::response::ApiResponse;
use util::state::AppState;

/// DELETE /api/alerts/history
///
/// Empties the alert history. The active alert slot and the geofence flag
/// are untouched.
pub async fn clear_history(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.tracker().clear_history().await;
    Json(ApiResponse::success((), "Alerts history cleared"))
}
