//! Cloud controller error types

use cf_core::ActorError;
use thiserror::Error;

/// Errors that can occur while talking to the cloud controller
#[derive(Error, Debug)]
pub enum CcError {
    /// Client misconfigured (missing endpoint, bad TLS setup)
    #[error("Invalid API configuration: {0}")]
    Config(String),

    /// Transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The access token was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Any other non-success status
    #[error("Unexpected response ({status}): {description}")]
    UnexpectedResponse { status: u16, description: String },

    /// Body did not match the expected resource shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CcError {
    /// Classify a non-success response by status code
    pub fn from_status(status: u16, description: String) -> Self {
        match status {
            401 => CcError::Unauthorized(description),
            404 => CcError::ResourceNotFound(description),
            _ => CcError::UnexpectedResponse {
                status,
                description,
            },
        }
    }
}

impl From<CcError> for ActorError {
    fn from(err: CcError) -> Self {
        ActorError::Other(anyhow::Error::new(err))
    }
}
