//! Core error types for the cf client

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while checking that the session is usable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// No access token recorded
    #[error("Not logged in. Use '{binary_name} login' to log in.")]
    NotLoggedIn { binary_name: String },

    /// No organization targeted
    #[error("No org targeted, use '{binary_name} target -o ORG' to target an org.")]
    NoOrganizationTargeted { binary_name: String },

    /// No space targeted
    #[error("No space targeted, use '{binary_name} target -s SPACE' to target a space.")]
    NoSpaceTargeted { binary_name: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors returned by an [`AppDataProvider`](crate::traits::AppDataProvider)
#[derive(Error, Debug)]
pub enum ActorError {
    /// No application with this name exists in the space
    #[error("Application '{name}' not found")]
    ApplicationNotFound { name: String },

    /// Any other failure, reported with its original message
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ActorError {
    pub fn not_found(name: impl Into<String>) -> Self {
        ActorError::ApplicationNotFound { name: name.into() }
    }
}
