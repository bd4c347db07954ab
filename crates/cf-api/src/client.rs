//! HTTP client for the cloud controller v2 API
//!
//! Every call returns its warnings next to the result, including on
//! failure, because the cloud controller attaches `X-Cf-Warnings` to error
//! responses as well. Requests are issued one at a time; there is no
//! pagination or retry here.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use cf_core::config::ApiConfig;
use cf_core::Warnings;

use crate::error::CcError;
use crate::resources::{
    AppEntity, AppSummaryBody, ErrorBody, InstanceEntry, Paginated, Resource, StackEntity,
    StatsEntry,
};

/// Response header (`X-Cf-Warnings`) carrying comma-separated, query-escaped warnings
pub const WARNINGS_HEADER: &str = "x-cf-warnings";

/// Outcome of a single request plus the warnings it carried
pub type CcResponse<T> = (Result<T, CcError>, Warnings);

/// Client for the cloud controller
pub struct CloudControllerClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl CloudControllerClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &ApiConfig, access_token: Option<&str>) -> Result<Self, CcError> {
        if config.base_url().is_empty() {
            return Err(CcError::Config("API endpoint not set".to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("cf/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.skip_ssl_validation)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            access_token: access_token.map(String::from),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List apps with the given name in a space
    pub async fn get_applications(
        &self,
        name: &str,
        space_guid: &str,
    ) -> CcResponse<Paginated<AppEntity>> {
        let query = [
            ("q", format!("name:{}", name)),
            ("q", format!("space_guid:{}", space_guid)),
        ];
        self.get("/v2/apps", &query).await
    }

    /// Get the app summary (routes with their domains)
    pub async fn get_application_summary(&self, app_guid: &str) -> CcResponse<AppSummaryBody> {
        self.get(&format!("/v2/apps/{}/summary", app_guid), &[]).await
    }

    /// Get a stack by GUID
    pub async fn get_stack(&self, stack_guid: &str) -> CcResponse<Resource<StackEntity>> {
        self.get(&format!("/v2/stacks/{}", stack_guid), &[]).await
    }

    /// Get instance states keyed by index
    pub async fn get_application_instances(
        &self,
        app_guid: &str,
    ) -> CcResponse<HashMap<String, InstanceEntry>> {
        self.get(&format!("/v2/apps/{}/instances", app_guid), &[])
            .await
    }

    /// Get instance usage keyed by index
    pub async fn get_application_instance_stats(
        &self,
        app_guid: &str,
    ) -> CcResponse<HashMap<String, StatsEntry>> {
        self.get(&format!("/v2/apps/{}/stats", app_guid), &[]).await
    }

    /// Make a GET request and decode the JSON body
    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> CcResponse<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.access_token {
            request = request.header(AUTHORIZATION, token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return (Err(CcError::Request(e)), Warnings::new()),
        };

        let warnings = parse_warnings(response.headers());
        (Self::handle_response(response).await, warnings)
    }

    /// Handle HTTP response and deserialize JSON
    async fn handle_response<T>(response: Response) -> Result<T, CcError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "response received");

        if status.is_success() {
            Ok(serde_json::from_str(&text)?)
        } else {
            let description = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.description)
                .unwrap_or(text);
            Err(CcError::from_status(status.as_u16(), description))
        }
    }
}

/// Split every `X-Cf-Warnings` header into individual warnings
pub fn parse_warnings(headers: &HeaderMap) -> Warnings {
    headers
        .get_all(WARNINGS_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|warning| !warning.is_empty())
        .map(unescape_warning)
        .collect()
}

/// Undo query escaping (`%20`, `+`) using the URL query parser
fn unescape_warning(raw: &str) -> String {
    Url::parse(&format!("http://localhost/?w={}", raw))
        .ok()
        .and_then(|url| url.query_pairs().next().map(|(_, value)| value.into_owned()))
        .unwrap_or_else(|| raw.to_string())
}
