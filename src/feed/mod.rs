mod client;
mod error;
mod types;

pub use client::FeedClient;
pub use error::FeedError;

#[cfg(test)]
pub mod testing;
