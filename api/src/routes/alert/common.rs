use serde::Deserialize;

/// Body of `POST /api/alert`. All three fields are required; they are
/// optional here so validation can fail with a message instead of a JSON
/// extraction error.
#[derive(Debug, Deserialize)]
pub struct SosRequest {
    pub device_id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
