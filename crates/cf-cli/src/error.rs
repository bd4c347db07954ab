//! User-facing command errors

use cf_core::{ActorError, ConfigError, TargetError};
use thiserror::Error;

/// Errors a command reports to the user
#[derive(Error, Debug)]
pub enum CommandError {
    /// Session is not logged in or not targeted
    #[error(transparent)]
    Target(#[from] TargetError),

    /// Session context could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The named app does not exist in the targeted space
    #[error("App {name} not found")]
    ApplicationNotFound { name: String },

    /// Any other provider failure, message unchanged
    #[error(transparent)]
    Provider(ActorError),
}

impl CommandError {
    /// Translate an actor error into what the user sees
    pub fn from_actor(err: ActorError) -> Self {
        match err {
            ActorError::ApplicationNotFound { name } => CommandError::ApplicationNotFound { name },
            other @ ActorError::Other(_) => CommandError::Provider(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_translated() {
        let err = CommandError::from_actor(ActorError::not_found("some-app"));
        assert!(matches!(&err, CommandError::ApplicationNotFound { name } if name == "some-app"));
        assert_eq!(err.to_string(), "App some-app not found");
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = CommandError::from_actor(ActorError::from(anyhow::anyhow!("get app summary error")));
        assert!(matches!(err, CommandError::Provider(_)));
        assert_eq!(err.to_string(), "get app summary error");
    }

    #[test]
    fn test_target_error_is_verbatim() {
        let err = CommandError::from(TargetError::NotLoggedIn {
            binary_name: "faceman".to_string(),
        });
        assert_eq!(err.to_string(), "Not logged in. Use 'faceman login' to log in.");
    }
}
