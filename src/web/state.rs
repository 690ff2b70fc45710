use std::sync::Arc;

use crate::feed::{FeedClient, FeedError};
use crate::geometry::OrbitModel;

use super::config::Config;

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: Arc<FeedClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, FeedError> {
        let feed = FeedClient::new(config.feed.url.clone(), config.feed.timeout)?;
        Ok(Self {
            config: Arc::new(config),
            feed: Arc::new(feed),
        })
    }

    pub fn model(&self) -> &OrbitModel {
        &self.config.model
    }
}
