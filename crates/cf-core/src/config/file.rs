//! On-disk session configuration

use serde::{Deserialize, Serialize};

use super::ApiConfig;
use crate::error::ConfigError;
use crate::traits::SessionConfig;
use crate::types::{Organization, Space, User};

/// The whole `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub api: ApiConfig,
    pub session: SessionSection,
    pub target: TargetSection,
}

/// Credentials recorded by `login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Name of the logged in user
    pub user: Option<String>,
}

/// Organization and space recorded by `target`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSection {
    pub organization: Option<Organization>,
    pub space: Option<Space>,
}

impl SessionConfig for ConfigFile {
    fn access_token(&self) -> Option<&str> {
        self.session
            .access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    fn has_targeted_organization(&self) -> bool {
        self.target
            .organization
            .as_ref()
            .is_some_and(|org| !org.guid.is_empty())
    }

    fn targeted_organization(&self) -> Organization {
        self.target.organization.clone().unwrap_or_default()
    }

    fn has_targeted_space(&self) -> bool {
        self.target
            .space
            .as_ref()
            .is_some_and(|space| !space.guid.is_empty())
    }

    fn targeted_space(&self) -> Space {
        self.target.space.clone().unwrap_or_default()
    }

    fn current_user(&self) -> Result<User, ConfigError> {
        match self.session.user.as_deref() {
            Some(name) if !name.is_empty() => Ok(User {
                name: name.to_string(),
            }),
            _ => Err(ConfigError::MissingField("session.user".to_string())),
        }
    }
}
