use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::health::HealthResponse;
use super::api::position::CurrentPosition;
use super::api::speed::SpeedRequest;
use super::api::stats::StatsResponse;
use crate::geometry::{GeoPosition, SpeedResult};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::position::current,
        super::api::speed::speed,
        super::api::stats::stats,
        super::api::health::health,
    ),
    components(
        schemas(
            CurrentPosition,
            GeoPosition,
            SpeedRequest,
            SpeedResult,
            StatsResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "ISS-O-Mat API",
        description = "Current position of the International Space Station and derived speed",
        version = "0.1.0"
    ),
    tags(
        (name = "iss", description = "Position and speed"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
