//! Application data provider traits

use async_trait::async_trait;

use crate::error::ActorError;
use crate::types::{Application, ApplicationSummary, Warnings};

/// Outcome of an actor call together with the warnings it collected.
///
/// Warnings are returned on failure as well, so callers can always show
/// them before reporting the error.
pub type ActorResponse<T> = (Result<T, ActorError>, Warnings);

/// Read access to application data for one space
#[async_trait]
pub trait AppDataProvider: Send + Sync {
    /// Look up an application by name in a space
    async fn get_application_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> ActorResponse<Application>;

    /// Look up an application and gather its stack, routes and instances
    async fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> ActorResponse<ApplicationSummary>;
}
