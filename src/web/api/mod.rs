pub mod error;
pub mod health;
pub mod position;
pub mod speed;
pub mod stats;
