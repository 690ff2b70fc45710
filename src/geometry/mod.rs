mod altitude;
mod error;
mod haversine;
mod model;
mod speed;
mod types;

pub use altitude::altitude_km;
pub use error::SpeedError;
pub use haversine::haversine_km;
pub use model::OrbitModel;
pub use speed::calculate_speed;
pub use types::{GeoPosition, SpeedResult};
