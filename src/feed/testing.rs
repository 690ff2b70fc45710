//! Throwaway upstream servers for exercising the feed client.

use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

pub const SAMPLE_LATITUDE: f64 = 47.6062;
pub const SAMPLE_LONGITUDE: f64 = -122.3321;
pub const SAMPLE_TIMESTAMP: i64 = 1_700_000_000;

#[derive(Debug, Clone, Copy)]
pub enum Upstream {
    Sample,
    Unsuccessful,
    ServerError,
    Garbage,
    /// Never answers within any reasonable client timeout.
    Stalled,
}

async fn respond(kind: Upstream) -> axum::response::Response {
    match kind {
        Upstream::Sample => Json(json!({
            "message": "success",
            "timestamp": SAMPLE_TIMESTAMP,
            "iss_position": {
                "latitude": SAMPLE_LATITUDE.to_string(),
                "longitude": SAMPLE_LONGITUDE.to_string(),
            }
        }))
        .into_response(),
        Upstream::Unsuccessful => Json(json!({ "message": "failure" })).into_response(),
        Upstream::ServerError => StatusCode::BAD_GATEWAY.into_response(),
        Upstream::Garbage => "<html>not json</html>".into_response(),
        Upstream::Stalled => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            StatusCode::OK.into_response()
        }
    }
}

/// Serves `kind` on an ephemeral local port and returns its URL.
pub async fn spawn(kind: Upstream) -> String {
    let app = Router::new().route("/iss-now.json", get(move || respond(kind)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/iss-now.json")
}

/// URL of a local port with nothing listening on it.
pub async fn unreachable() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/iss-now.json")
}
