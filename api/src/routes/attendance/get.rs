//! Attendance read-only routes: full scan log, current presence per worker,
//! and per-worker history. All three are pass-throughs to the store.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::response::ApiResponse;
use db::models::attendance::Model as Attendance;
use util::state::AppState;

use super::common::AttendanceRecordResponse;

/// GET /api/attendance
///
/// Every recorded scan, newest first.
pub async fn list_attendance(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<AttendanceRecordResponse>>>) {
    match Attendance::all(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter().map(Into::into).collect(),
                "Attendance records retrieved",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list attendance records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve attendance records")),
            )
        }
    }
}

/// GET /api/attendance/latest
///
/// One row per uid: each worker's most recent scan.
pub async fn list_latest_attendance(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<AttendanceRecordResponse>>>) {
    match Attendance::latest_per_uid(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter().map(Into::into).collect(),
                "Latest attendance per worker retrieved",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list latest attendance");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve attendance records")),
            )
        }
    }
}

/// GET /api/attendance/history/{uid}
///
/// Full scan history for one worker, newest first. An unknown uid yields an
/// empty list, not a 404.
pub async fn get_uid_history(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> (StatusCode, Json<ApiResponse<Vec<AttendanceRecordResponse>>>) {
    match Attendance::history_for_uid(state.db(), &uid).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter().map(Into::into).collect(),
                "Attendance history retrieved",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, uid = %uid, "Failed to fetch attendance history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve attendance history")),
            )
        }
    }
}
