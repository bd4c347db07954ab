//! Cloud controller API configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::serde_utils::duration_secs;

/// Where and how to reach the cloud controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the cloud controller (e.g. `https://api.example.com`)
    pub endpoint: String,

    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,

    /// Accept self-signed certificates
    pub skip_ssl_validation: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(30),
            skip_ssl_validation: false,
        }
    }
}

impl ApiConfig {
    /// Endpoint without a trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
