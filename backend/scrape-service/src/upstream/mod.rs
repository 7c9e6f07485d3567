//! Instagram upstream: typed payloads and the HTTP client

pub mod client;
pub mod types;

pub use client::InstagramClient;
pub use types::{MediaEdge, MediaNode, TimelineMedia};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Instagram request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Instagram returned HTTP {0}")]
    Status(u16),

    #[error("Unexpected Instagram payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to fetch image {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    #[error("Invalid post timestamp: {0}")]
    InvalidTimestamp(i64),
}
