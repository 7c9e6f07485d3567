//! Configuration for the scrape service, loaded from environment variables
use serde::Deserialize;

/// Browser-like identity presented to Instagram so the query is not trivially bot-blocked.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_app_host")]
    pub app_host: String,

    /// HTTP server port
    #[serde(default = "default_app_port")]
    pub app_port: u16,

    /// Base URL of the Instagram web API (overridden in tests)
    #[serde(default = "default_instagram_base_url")]
    pub instagram_base_url: String,

    /// Persisted GraphQL query id for the profile timeline query
    #[serde(default = "default_instagram_query_id")]
    pub instagram_query_id: String,

    #[serde(default = "default_instagram_user_agent")]
    pub instagram_user_agent: String,

    /// Timeout for outbound calls in seconds. Unset means no timeout.
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,

    /// Number of image downloads in flight per request (1 = strictly sequential)
    #[serde(default = "default_image_fetch_concurrency")]
    pub image_fetch_concurrency: usize,

    /// Post count used when the request omits `first`
    #[serde(default = "default_post_count")]
    pub default_post_count: i64,

    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_port() -> u16 {
    8080
}

fn default_instagram_base_url() -> String {
    "https://www.instagram.com".to_string()
}

fn default_instagram_query_id() -> String {
    "17888483320059182".to_string()
}

fn default_instagram_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_image_fetch_concurrency() -> usize {
    1
}

fn default_post_count() -> i64 {
    10
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Build a configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_host: default_app_host(),
            app_port: default_app_port(),
            instagram_base_url: default_instagram_base_url(),
            instagram_query_id: default_instagram_query_id(),
            instagram_user_agent: default_instagram_user_agent(),
            upstream_timeout_secs: None,
            image_fetch_concurrency: default_image_fetch_concurrency(),
            default_post_count: default_post_count(),
            log_format: default_log_format(),
        }
    }
}
