use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AttendanceRecordResponse {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub timestamp: String,
}

impl From<db::models::attendance::Model> for AttendanceRecordResponse {
    fn from(m: db::models::attendance::Model) -> Self {
        Self {
            id: m.id,
            uid: m.uid,
            name: m.name,
            timestamp: m.timestamp.to_rfc3339(),
        }
    }
}

/// Body of `POST /api/attendance`. Fields are optional so missing ones can be
/// reported by name instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub uid: Option<String>,
    pub name: Option<String>,
}

/// Outcome payload of `POST /api/attendance`.
///
/// `status` is one of `inserted`, `updated`, `deduplicated`. `record` is set
/// for the two write outcomes; `last_scan` only for deduplication, carrying
/// the timestamp of the scan still in its cooldown.
#[derive(Debug, Default, Serialize)]
pub struct ScanResponse {
    pub status: String,
    pub record: Option<AttendanceRecordResponse>,
    pub last_scan: Option<String>,
}
