use serde::Deserialize;

/// Body of the open-notify `iss-now.json` endpoint.
///
/// Coordinates are transmitted as decimal strings.
#[derive(Debug, Deserialize)]
pub struct IssNowResponse {
    pub message: String,
    pub iss_position: Option<IssPosition>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}
