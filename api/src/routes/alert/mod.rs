use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;

pub use delete::clear_history;
pub use get::{get_alert, get_history};
pub use post::{clear_alert, report_alert};

/// `/alert` — the single active SOS alert slot.
pub fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(report_alert).get(get_alert))
        .route("/clear", post(clear_alert))
}

/// `/alerts` — the combined SOS/geofence history timeline.
pub fn alert_history_routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history).delete(clear_history))
}
