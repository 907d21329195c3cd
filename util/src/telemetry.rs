//! In-memory alert and geofence state shared by request handlers.
//!
//! Devices push SOS alerts, GPS fixes and geofence breaches far more often
//! than anyone reads them back, and none of it needs to survive a restart, so
//! the whole thing lives in process memory behind one lock. Each operation
//! takes the lock exactly once, which makes every read-modify-write (history
//! push plus eviction, SOS set-latest plus append) atomic with respect to
//! concurrently dispatched handlers.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

/// Maximum number of alerts retained in the combined history timeline.
pub const MAX_ALERT_HISTORY: usize = 100;

/// Discriminates the two alert sources sharing the history timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    #[serde(rename = "SOS")]
    Sos,
    #[serde(rename = "GEOFENCE")]
    Geofence,
}

/// A single alert event, stamped server-side at receipt.
///
/// SOS alerts always carry coordinates; geofence breaches may not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub device_id: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
struct TrackerState {
    latest_alert: Option<Alert>,
    latest_gps: Option<String>,
    fence_breached: bool,
    history: VecDeque<Alert>,
}

impl TrackerState {
    fn push_history(&mut self, alert: Alert) {
        self.history.push_front(alert);
        if self.history.len() > MAX_ALERT_HISTORY {
            self.history.pop_back();
        }
    }
}

/// Cloneable handle to the process-wide alert/GPS/fence state.
///
/// Constructed once at startup and carried in `AppState`; handlers clone the
/// handle freely, all clones share the same state.
#[derive(Clone, Default)]
pub struct AlertTracker {
    inner: Arc<RwLock<TrackerState>>,
}

impl AlertTracker {
    /// Creates a tracker with no active alert, no GPS fix, no breach and an
    /// empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an SOS alert: becomes the latest alert and joins the history.
    ///
    /// Callers validate `device_id`/`lat`/`lon` before reaching this point.
    pub async fn report_sos(&self, device_id: &str, lat: f64, lon: f64) -> Alert {
        let alert = Alert {
            kind: AlertKind::Sos,
            device_id: device_id.to_owned(),
            lat: Some(lat),
            lon: Some(lon),
            timestamp: Utc::now(),
        };
        let mut state = self.inner.write().await;
        state.latest_alert = Some(alert.clone());
        state.push_history(alert.clone());
        alert
    }

    /// Returns the most recent SOS alert, if one is active.
    pub async fn latest_alert(&self) -> Option<Alert> {
        self.inner.read().await.latest_alert.clone()
    }

    /// Clears the active SOS alert. History is untouched.
    pub async fn clear_alert(&self) {
        self.inner.write().await.latest_alert = None;
    }

    /// Records a geofence breach: raises the breach flag and appends a
    /// GEOFENCE entry to the history.
    ///
    /// Breaches never occupy the SOS alert slot; the flag and the slot are
    /// tracked independently. A missing `device_id` is recorded as "unknown".
    pub async fn report_breach(
        &self,
        device_id: Option<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Alert {
        let alert = Alert {
            kind: AlertKind::Geofence,
            device_id: device_id.unwrap_or_else(|| "unknown".into()),
            lat,
            lon,
            timestamp: Utc::now(),
        };
        let mut state = self.inner.write().await;
        state.fence_breached = true;
        state.push_history(alert.clone());
        alert
    }

    /// Returns whether a geofence breach is currently flagged.
    pub async fn fence_breached(&self) -> bool {
        self.inner.read().await.fence_breached
    }

    /// Lowers the geofence breach flag.
    pub async fn clear_fence(&self) {
        self.inner.write().await.fence_breached = false;
    }

    /// Overwrites the latest GPS fix. No history is kept for GPS.
    pub async fn record_gps(&self, payload: String) {
        self.inner.write().await.latest_gps = Some(payload);
    }

    /// Returns the most recent GPS fix, if any has been reported.
    pub async fn latest_gps(&self) -> Option<String> {
        self.inner.read().await.latest_gps.clone()
    }

    /// Returns the combined alert history, newest first.
    pub async fn history(&self) -> Vec<Alert> {
        self.inner.read().await.history.iter().cloned().collect()
    }

    /// Empties the alert history. The latest-alert slot and breach flag keep
    /// their values.
    pub async fn clear_history(&self) {
        self.inner.write().await.history.clear();
    }
}
