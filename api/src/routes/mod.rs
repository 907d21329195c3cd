//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness and store reachability probes
//! - `/attendance` → attendance scan ingestion and queries (relational store)
//! - `/alert` → SOS alert slot (in-memory)
//! - `/alerts` → combined SOS/geofence alert history (in-memory)
//! - `/gps` → latest GPS fix (in-memory)
//! - `/fence` → geofence breach flag (in-memory)

use axum::Router;
use util::state::AppState;

pub mod alert;
pub mod attendance;
pub mod fence;
pub mod gps;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The route groups are composed against `AppState` and the state is applied
/// here, so `main` only has to nest the result under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/attendance", attendance::attendance_routes())
        .nest("/alert", alert::alert_routes())
        .nest("/alerts", alert::alert_history_routes())
        .nest("/gps", gps::gps_routes())
        .nest("/fence", fence::fence_routes())
        .with_state(app_state)
}
