use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::response::ApiResponse;
use util::state::AppState;

/// Builds the `/health` route group.
///
/// `GET /health` is a plain liveness probe; `GET /health/db` additionally
/// pings the relational store.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/db", get(db_health))
}

/// GET /health
///
/// Returns a simple success response to indicate the API is running.
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}

/// GET /health/db
///
/// Pings the store. `500` with a generic message when the store is
/// unreachable; the underlying error only goes to the log.
async fn db_health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<()>>) {
    match state.db().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Database reachable")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database unreachable")),
            )
        }
    }
}
