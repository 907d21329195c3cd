use axum::{Json, extract::State, http::StatusCode};
use chrono::Duration;

use crate::response::ApiResponse;
use db::models::attendance::{Model as Attendance, ScanOutcome};
use util::{config, state::AppState};

use super::common::{ScanRequest, ScanResponse};

/// POST /api/attendance
///
/// Records a badge scan for `{uid, name}` under the cooldown policy:
/// - `201` `inserted` — first scan ever for this uid
/// - `200` `updated` — uid seen before, outside the cooldown window
/// - `200` `deduplicated` — a previous scan is still in its cooldown;
///   `last_scan` carries that scan's timestamp, nothing is written
///
/// Both fields are required and non-empty; a `400` names the missing ones and
/// the store is never touched.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(body): Json<ScanRequest>,
) -> (StatusCode, Json<ApiResponse<ScanResponse>>) {
    let uid = body.uid.as_deref().map(str::trim).unwrap_or_default();
    let name = body.name.as_deref().map(str::trim).unwrap_or_default();

    let mut missing = Vec::new();
    if uid.is_empty() {
        missing.push("uid");
    }
    if name.is_empty() {
        missing.push("name");
    }
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        );
    }

    let cooldown = Duration::seconds(config::attendance_cooldown_seconds() as i64);

    match Attendance::record_scan(state.db(), uid, name, cooldown).await {
        Ok(ScanOutcome::Inserted(row)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ScanResponse {
                    status: "inserted".into(),
                    record: Some(row.into()),
                    last_scan: None,
                },
                "Attendance recorded",
            )),
        ),
        Ok(ScanOutcome::Updated(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ScanResponse {
                    status: "updated".into(),
                    record: Some(row.into()),
                    last_scan: None,
                },
                "Attendance refreshed",
            )),
        ),
        Ok(ScanOutcome::Deduplicated(last_scan)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ScanResponse {
                    status: "deduplicated".into(),
                    record: None,
                    last_scan: Some(last_scan.to_rfc3339()),
                },
                "Duplicate scan ignored; previous scan still in cooldown",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, uid = %uid, "Failed to record attendance scan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to record attendance")),
            )
        }
    }
}
