//! Target checking against the session config

use cf_core::traits::{SessionConfig, TargetChecker};
use cf_core::TargetError;

/// Binary name used in hints when it cannot be derived from argv
pub const DEFAULT_BINARY_NAME: &str = "cf";

/// [`TargetChecker`] that reads login and target state from a config
pub struct ConfigTargetChecker<'a, C: SessionConfig> {
    config: &'a C,
    binary_name: String,
}

impl<'a, C: SessionConfig> ConfigTargetChecker<'a, C> {
    pub fn new(config: &'a C, binary_name: impl Into<String>) -> Self {
        Self {
            config,
            binary_name: binary_name.into(),
        }
    }
}

impl<C: SessionConfig> TargetChecker for ConfigTargetChecker<'_, C> {
    fn check_target(&self, require_org: bool, require_space: bool) -> Result<(), TargetError> {
        let binary_name = self.binary_name.clone();

        if self.config.access_token().is_none() {
            return Err(TargetError::NotLoggedIn { binary_name });
        }

        if require_org && !self.config.has_targeted_organization() {
            return Err(TargetError::NoOrganizationTargeted { binary_name });
        }

        if require_space && !self.config.has_targeted_space() {
            return Err(TargetError::NoSpaceTargeted { binary_name });
        }

        Ok(())
    }
}

/// Name the user invoked us by, for use in hints (`faceman login`)
pub fn binary_name_from_args() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_BINARY_NAME.to_string())
}
