//! Scrape Service - recent Instagram posts with inlined images
//!
//! Queries the Instagram profile timeline, downloads each post's display
//! image and returns the posts as JSON with the images base64-encoded.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod upstream;

pub use config::Config;
pub use error::{AppError, Result};
pub use upstream::{InstagramClient, UpstreamError};

/// Shared, read-only state handed to every request
pub struct AppState {
    pub instagram: InstagramClient,
    pub default_post_count: i64,
    pub image_fetch_concurrency: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> std::result::Result<Self, UpstreamError> {
        Ok(Self {
            instagram: InstagramClient::new(config)?,
            default_post_count: config.default_post_count,
            image_fetch_concurrency: config.image_fetch_concurrency,
        })
    }
}
