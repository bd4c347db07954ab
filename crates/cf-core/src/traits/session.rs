//! Session context traits

use crate::error::ConfigError;
use crate::types::{Organization, Space, User};

/// Read-only view of the current session
///
/// Targeted organization and space are only meaningful when the matching
/// `has_targeted_*` method returns true; otherwise they are empty.
pub trait SessionConfig: Send + Sync {
    /// Access token of the logged in user, if any
    fn access_token(&self) -> Option<&str>;

    /// Whether an organization is targeted
    fn has_targeted_organization(&self) -> bool;

    /// The targeted organization
    fn targeted_organization(&self) -> Organization;

    /// Whether a space is targeted
    fn has_targeted_space(&self) -> bool;

    /// The targeted space
    fn targeted_space(&self) -> Space;

    /// The logged in user
    fn current_user(&self) -> Result<User, ConfigError>;
}
