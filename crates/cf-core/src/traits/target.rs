//! Target checking

use crate::error::TargetError;

/// Verifies that the session can issue requests against a space
pub trait TargetChecker: Send + Sync {
    /// Fail unless logged in and, when required, an org and a space are
    /// targeted. Checks run in that order and stop at the first failure.
    fn check_target(&self, require_org: bool, require_space: bool) -> Result<(), TargetError>;
}
