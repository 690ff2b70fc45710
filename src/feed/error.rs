use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("upstream returned unexpected body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("upstream reported '{message}'")]
    Unsuccessful { message: String },
    #[error("upstream response is missing '{0}'")]
    MissingField(&'static str),
    #[error("invalid {field} '{value}'")]
    InvalidCoordinate { field: &'static str, value: String },
}

impl FeedError {
    /// Whether the failure is a transport problem rather than bad data.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FeedError::Request(_))
    }
}
