use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::http::HttpClient;
use crate::resolver::attempt::VIDEO_INFO_ENDPOINT;

/// Resolver configuration.
///
/// `ResolverConfig::default()` talks to the real metadata endpoint with a
/// 60 second per-request bound. The struct derives serde so hosts can embed
/// it in their own config trees.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResolverConfig {
    /// Base URL of the metadata endpoint, without a query string.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds, applied to every fetch and probe.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    VIDEO_INFO_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_user_agent() -> String {
    HttpClient::default_user_agent()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
