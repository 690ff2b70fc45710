use std::time::Duration;

use crate::geometry::GeoPosition;

use super::error::FeedError;
use super::types::IssNowResponse;

const SUCCESS: &str = "success";

/// Fetches the current station position from the upstream feed.
///
/// Each call issues exactly one GET bounded by the configured timeout.
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FeedError::Request)?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub async fn current_position(&self) -> Result<GeoPosition, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FeedError::Request)?;

        let body: IssNowResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                FeedError::Decode(e)
            } else {
                FeedError::Request(e)
            }
        })?;

        parse_sample(body)
    }
}

fn parse_sample(body: IssNowResponse) -> Result<GeoPosition, FeedError> {
    if body.message != SUCCESS {
        return Err(FeedError::Unsuccessful {
            message: body.message,
        });
    }

    let position = body
        .iss_position
        .ok_or(FeedError::MissingField("iss_position"))?;
    let timestamp = body.timestamp.ok_or(FeedError::MissingField("timestamp"))?;

    Ok(GeoPosition {
        latitude: parse_coordinate("latitude", &position.latitude)?,
        longitude: parse_coordinate("longitude", &position.longitude)?,
        timestamp,
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, FeedError> {
    value
        .trim()
        .parse()
        .map_err(|_| FeedError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::testing::{self, Upstream};

    fn body(json: &str) -> IssNowResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_string_coordinates() {
        let sample = parse_sample(body(
            r#"{"message": "success", "timestamp": 1700000000,
                "iss_position": {"latitude": "-12.3456", "longitude": "98.7654"}}"#,
        ))
        .unwrap();
        assert_eq!(
            sample,
            GeoPosition {
                latitude: -12.3456,
                longitude: 98.7654,
                timestamp: 1_700_000_000,
            }
        );
    }

    #[test]
    fn rejects_non_success_message() {
        let err = parse_sample(body(r#"{"message": "failure"}"#)).unwrap_err();
        assert!(matches!(err, FeedError::Unsuccessful { ref message } if message == "failure"));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn rejects_unparseable_coordinate() {
        let err = parse_sample(body(
            r#"{"message": "success", "timestamp": 1,
                "iss_position": {"latitude": "north", "longitude": "0"}}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            FeedError::InvalidCoordinate {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn rejects_missing_timestamp() {
        let err = parse_sample(body(
            r#"{"message": "success",
                "iss_position": {"latitude": "1", "longitude": "2"}}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FeedError::MissingField("timestamp")));
    }

    #[tokio::test]
    async fn fetches_from_upstream() {
        let url = testing::spawn(Upstream::Sample).await;
        let client = FeedClient::new(url, Duration::from_secs(5)).unwrap();
        let sample = client.current_position().await.unwrap();
        assert_eq!(sample.latitude, testing::SAMPLE_LATITUDE);
        assert_eq!(sample.longitude, testing::SAMPLE_LONGITUDE);
        assert_eq!(sample.timestamp, testing::SAMPLE_TIMESTAMP);
    }

    #[tokio::test]
    async fn timeout_is_unavailable() {
        let url = testing::spawn(Upstream::Stalled).await;
        let client = FeedClient::new(url, Duration::from_millis(100)).unwrap();
        let err = client.current_position().await.unwrap_err();
        assert!(err.is_unavailable(), "{err}");
    }

    #[tokio::test]
    async fn server_error_is_unavailable() {
        let url = testing::spawn(Upstream::ServerError).await;
        let client = FeedClient::new(url, Duration::from_secs(5)).unwrap();
        let err = client.current_position().await.unwrap_err();
        assert!(err.is_unavailable(), "{err}");
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let url = testing::spawn(Upstream::Garbage).await;
        let client = FeedClient::new(url, Duration::from_secs(5)).unwrap();
        let err = client.current_position().await.unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)), "{err}");
    }

    #[tokio::test]
    async fn refused_connection_is_unavailable() {
        let url = testing::unreachable().await;
        let client = FeedClient::new(url, Duration::from_secs(1)).unwrap();
        let err = client.current_position().await.unwrap_err();
        assert!(err.is_unavailable(), "{err}");
    }
}
