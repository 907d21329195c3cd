//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection used by the attendance endpoints and the
//! in-memory alert tracker used by the SOS/GPS/geofence endpoints. Passed into
//! handlers via Axum's `State<T>` extractor.

use crate::telemetry::AlertTracker;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    tracker: AlertTracker,
}

impl AppState {
    /// Creates a new `AppState` from a SeaORM connection and an alert tracker.
    pub fn new(db: DatabaseConnection, tracker: AlertTracker) -> Self {
        Self { db, tracker }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the internal `AlertTracker`.
    pub fn tracker(&self) -> &AlertTracker {
        &self.tracker
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Returns a cloned handle to the `AlertTracker`.
    pub fn tracker_clone(&self) -> AlertTracker {
        self.tracker.clone()
    }
}
