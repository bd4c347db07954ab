//! Application actor backed by the cloud controller
//!
//! Combines several cloud controller requests into the domain views the
//! commands display. Requests run sequentially and warnings from every
//! request are kept, in order, even when a later request fails.

use async_trait::async_trait;

use cf_core::traits::{ActorResponse, AppDataProvider};
use cf_core::types::{Application, ApplicationInstance, ApplicationSummary, Route, Stack};
use cf_core::{ActorError, Warnings};

use cf_core::config::ApiConfig;

use crate::client::{CcResponse, CloudControllerClient};
use crate::error::CcError;
use crate::resources::merge_instances;

/// [`AppDataProvider`] that talks to a cloud controller
pub struct CloudControllerActor {
    client: Result<CloudControllerClient, CcError>,
}

impl CloudControllerActor {
    /// Create an actor using the given client
    pub fn new(client: CloudControllerClient) -> Self {
        Self { client: Ok(client) }
    }

    /// Create an actor for the configured endpoint.
    ///
    /// A client that cannot be built is not an error here: every request
    /// made through the actor fails with the construction error instead.
    pub fn from_config(config: &ApiConfig, access_token: Option<&str>) -> Self {
        let client = CloudControllerClient::new(config, access_token);
        if let Err(e) = &client {
            tracing::debug!("Cloud controller client unavailable: {}", e);
        }
        Self { client }
    }

    fn client(&self) -> Result<&CloudControllerClient, ActorError> {
        self.client
            .as_ref()
            .map_err(|e| ActorError::Other(anyhow::anyhow!("{}", e)))
    }

    async fn find_application(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Application, ActorError> {
        let client = self.client()?;
        let page = collect(client.get_applications(name, space_guid).await, warnings)?;

        page.resources
            .into_iter()
            .next()
            .map(Application::from)
            .ok_or_else(|| ActorError::not_found(name))
    }

    async fn build_summary(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<ApplicationSummary, ActorError> {
        let application = self.find_application(name, space_guid, warnings).await?;
        let client = self.client()?;

        let summary = collect(
            client.get_application_summary(&application.guid).await,
            warnings,
        )?;
        let routes = summary.routes.into_iter().map(Route::from).collect();

        let stack = if application.stack_guid.is_empty() {
            Stack::default()
        } else {
            collect(client.get_stack(&application.stack_guid).await, warnings)?.into()
        };

        let running_instances = if application.is_started() {
            self.fetch_instances(&application.guid, warnings).await?
        } else {
            tracing::debug!(app = %application.name, "app not started, skipping instances");
            Vec::new()
        };

        Ok(ApplicationSummary {
            application,
            stack,
            routes,
            running_instances,
        })
    }

    async fn fetch_instances(
        &self,
        app_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<Vec<ApplicationInstance>, ActorError> {
        let client = self.client()?;
        let instances = collect(client.get_application_instances(app_guid).await, warnings)?;
        let stats = collect(
            client.get_application_instance_stats(app_guid).await,
            warnings,
        )?;
        Ok(merge_instances(instances, stats))
    }
}

#[async_trait]
impl AppDataProvider for CloudControllerActor {
    async fn get_application_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> ActorResponse<Application> {
        let mut warnings = Warnings::new();
        let result = self.find_application(name, space_guid, &mut warnings).await;
        (result, warnings)
    }

    async fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> ActorResponse<ApplicationSummary> {
        let mut warnings = Warnings::new();
        let result = self.build_summary(name, space_guid, &mut warnings).await;
        if let Ok(summary) = &result {
            tracing::debug!(
                app = %summary.application.name,
                instances = summary.reported_instances(),
                routes = summary.routes.len(),
                "application summary assembled"
            );
        }
        (result, warnings)
    }
}

/// Move a response's warnings into the running list and lift its error
fn collect<T>((result, new_warnings): CcResponse<T>, warnings: &mut Warnings) -> Result<T, ActorError> {
    warnings.extend(new_warnings);
    result.map_err(ActorError::from)
}
