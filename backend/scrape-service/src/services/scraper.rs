//! Profile scraping: timeline query, image download and response assembly
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::DateTime;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{Post, ScrapeResponse};
use crate::upstream::{InstagramClient, MediaNode, UpstreamError};

/// Format a Unix timestamp as `DD-MMM-YYYY` in UTC, e.g. `05-Jan-2024`
pub fn format_created_at(timestamp: i64) -> std::result::Result<String, UpstreamError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%d-%b-%Y").to_string())
        .ok_or(UpstreamError::InvalidTimestamp(timestamp))
}

/// Standard base64, padded, no line wrapping
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn build_post(id: usize, node: MediaNode, image: &[u8]) -> std::result::Result<Post, UpstreamError> {
    Ok(Post {
        id,
        text: node.caption().to_string(),
        created_at: format_created_at(node.taken_at_timestamp)?,
        base64: encode_image(image),
        thumbnail_src: node.thumbnail_src,
        display_url: node.display_url,
        shortcode: node.shortcode,
    })
}

/// Fetch the newest `first` posts of a profile with their display images inlined.
///
/// Images are downloaded with at most `concurrency` requests in flight (1 keeps
/// them strictly sequential). Posts keep their upstream index as `id` and the
/// result lists them in reverse upstream order. Any failure fails the whole call.
pub async fn scrape_profile(
    client: &InstagramClient,
    profile_id: &str,
    first: i64,
    concurrency: usize,
) -> Result<ScrapeResponse> {
    let media = client
        .fetch_timeline(profile_id, first)
        .await?
        .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

    let total = media.count;
    let edge_count = media.edges.len();
    info!(profile_id, edges = edge_count, total, "Fetched Instagram timeline");

    let mut posts: Vec<Post> = stream::iter(media.edges.into_iter().enumerate())
        .map(|(index, edge)| async move {
            let image = client.fetch_image(&edge.node.display_url).await?;
            build_post(index, edge.node, &image)
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    posts.reverse();

    Ok(ScrapeResponse {
        first: posts.len(),
        total,
        result: posts,
    })
}
