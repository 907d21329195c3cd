use axum::{Router, routing::get};
use util::state::AppState;

mod common;
mod get;
mod post;

pub use get::{get_uid_history, list_attendance, list_latest_attendance};
pub use post::record_attendance;

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendance).post(record_attendance))
        .route("/latest", get(list_latest_attendance))
        .route("/history/{uid}", get(get_uid_history))
}
