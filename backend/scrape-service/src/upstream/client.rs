//! Instagram web API client
use bytes::Bytes;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::types::{TimelineMedia, TimelineQueryResponse, TimelineVariables};
use super::UpstreamError;
use crate::config::Config;

const GRAPHQL_QUERY_PATH: &str = "/graphql/query/";

/// Client for the profile timeline query and the image CDN
pub struct InstagramClient {
    client: Client,
    base_url: String,
    query_id: String,
    user_agent: String,
}

impl InstagramClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.instagram_base_url.trim_end_matches('/').to_string(),
            query_id: config.instagram_query_id.clone(),
            user_agent: config.instagram_user_agent.clone(),
        })
    }

    /// Fetch the first page of a profile's timeline.
    ///
    /// Returns `Ok(None)` when Instagram reports no user for `profile_id`.
    pub async fn fetch_timeline(
        &self,
        profile_id: &str,
        first: i64,
    ) -> Result<Option<TimelineMedia>, UpstreamError> {
        let variables = serde_json::to_string(&TimelineVariables {
            id: profile_id,
            first,
            after: None,
        })?;

        let request = self
            .client
            .get(format!("{}{}", self.base_url, GRAPHQL_QUERY_PATH))
            .query(&[("query_id", self.query_id.as_str()), ("variables", variables.as_str())])
            .header(USER_AGENT, &self.user_agent)
            .build()?;

        info!(url = %request.url(), "Querying Instagram timeline");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(payload = %String::from_utf8_lossy(&body), "Instagram timeline payload");

        let payload: TimelineQueryResponse = serde_json::from_slice(&body)?;
        Ok(payload
            .data
            .user
            .map(|user| user.edge_owner_to_timeline_media))
    }

    /// Download the raw bytes behind an image URL
    pub async fn fetch_image(&self, url: &str) -> Result<Bytes, UpstreamError> {
        debug!(url = %url, "Fetching image");

        let image_error = |reason: String| UpstreamError::ImageFetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| image_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(image_error(format!("status {}", status.as_u16())));
        }

        response.bytes().await.map_err(|e| image_error(e.to_string()))
    }
}
