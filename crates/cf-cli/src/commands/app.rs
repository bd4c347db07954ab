//! `app` command: health and status of a single application

use clap::Args;

use cf_core::traits::{AppDataProvider, SessionConfig, TargetChecker};

use crate::error::CommandError;
use crate::output::render_summary;
use crate::ui::OutputSink;

/// Arguments of the `app` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AppArgs {
    /// The application name
    #[arg(value_name = "APP_NAME")]
    pub app_name: String,

    /// Retrieve and display the given app's guid instead of its health and status report
    #[arg(long)]
    pub guid: bool,
}

/// What the `app` command fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppQuery {
    /// Only the application GUID
    Guid,
    /// The full health and status summary
    Summary,
}

impl From<&AppArgs> for AppQuery {
    fn from(args: &AppArgs) -> Self {
        if args.guid {
            AppQuery::Guid
        } else {
            AppQuery::Summary
        }
    }
}

/// Execute the app command
pub async fn app_command(
    args: &AppArgs,
    checker: &dyn TargetChecker,
    config: &dyn SessionConfig,
    actor: &dyn AppDataProvider,
    ui: &mut dyn OutputSink,
) -> Result<(), CommandError> {
    checker.check_target(true, true)?;

    let org = config.targeted_organization();
    let space = config.targeted_space();
    let user = config.current_user()?;

    ui.display_text(&format!(
        "Showing health and status for app {} in org {} / space {} as {}...",
        args.app_name, org.name, space.name, user.name
    ));
    ui.display_newline();

    let query = AppQuery::from(args);
    tracing::debug!(app = %args.app_name, space = %space.guid, ?query, "Fetching application");

    match query {
        AppQuery::Guid => {
            let (result, warnings) = actor
                .get_application_by_name_and_space(&args.app_name, &space.guid)
                .await;
            ui.display_warnings(&warnings);

            let app = result.map_err(CommandError::from_actor)?;
            ui.display_text(&app.guid);
        }
        AppQuery::Summary => {
            let (result, warnings) = actor
                .get_application_summary_by_name_and_space(&args.app_name, &space.guid)
                .await;
            ui.display_warnings(&warnings);

            let summary = result.map_err(CommandError::from_actor)?;
            tracing::debug!(
                instances = summary.reported_instances(),
                routes = summary.routes.len(),
                "Rendering application summary"
            );
            for line in render_summary(&summary) {
                ui.display_text(&line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use cf_core::traits::ActorResponse;
    use cf_core::types::{
        Application, ApplicationInstance, ApplicationSummary, InstanceState, Organization, Route,
        Space, Stack, User,
    };
    use cf_core::{ActorError, ConfigError, TargetError};

    use crate::output::NO_RUNNING_INSTANCES;
    use crate::ui::BufferSink;

    const MEGABYTE: u64 = 1024 * 1024;
    const FLAVOR: &str =
        "Showing health and status for app some-app in org some-org / space some-space as some-user...";

    struct FakeChecker {
        result: Result<(), TargetError>,
        calls: Mutex<Vec<(bool, bool)>>,
    }

    impl FakeChecker {
        fn passing() -> Self {
            Self {
                result: Ok(()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: TargetError) -> Self {
            Self {
                result: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl TargetChecker for FakeChecker {
        fn check_target(&self, require_org: bool, require_space: bool) -> Result<(), TargetError> {
            self.calls.lock().unwrap().push((require_org, require_space));
            self.result.clone()
        }
    }

    struct FakeConfig {
        user: Option<String>,
    }

    impl FakeConfig {
        fn new() -> Self {
            Self {
                user: Some("some-user".to_string()),
            }
        }
    }

    impl SessionConfig for FakeConfig {
        fn access_token(&self) -> Option<&str> {
            Some("some-token")
        }

        fn has_targeted_organization(&self) -> bool {
            true
        }

        fn targeted_organization(&self) -> Organization {
            Organization {
                guid: "some-org-guid".to_string(),
                name: "some-org".to_string(),
            }
        }

        fn has_targeted_space(&self) -> bool {
            true
        }

        fn targeted_space(&self) -> Space {
            Space {
                guid: "some-space-guid".to_string(),
                name: "some-space".to_string(),
            }
        }

        fn current_user(&self) -> Result<User, ConfigError> {
            self.user
                .clone()
                .map(|name| User { name })
                .ok_or_else(|| ConfigError::MissingField("session.user".to_string()))
        }
    }

    enum Outcome {
        Found,
        NotFound,
        Failed(&'static str),
    }

    struct FakeActor {
        outcome: Outcome,
        summary: ApplicationSummary,
        warnings: Vec<String>,
        app_calls: Mutex<Vec<(String, String)>>,
        summary_calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeActor {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                summary: ApplicationSummary::default(),
                warnings: vec!["warning-1".to_string(), "warning-2".to_string()],
                app_calls: Mutex::new(Vec::new()),
                summary_calls: Mutex::new(Vec::new()),
            }
        }

        fn with_summary(summary: ApplicationSummary) -> Self {
            Self {
                summary,
                ..Self::new(Outcome::Found)
            }
        }

        fn respond<T>(&self, value: T) -> ActorResponse<T> {
            let result = match self.outcome {
                Outcome::Found => Ok(value),
                Outcome::NotFound => Err(ActorError::not_found("some-app")),
                Outcome::Failed(msg) => Err(ActorError::from(anyhow::anyhow!(msg))),
            };
            (result, self.warnings.clone())
        }

        fn total_calls(&self) -> usize {
            self.app_calls.lock().unwrap().len() + self.summary_calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AppDataProvider for FakeActor {
        async fn get_application_by_name_and_space(
            &self,
            name: &str,
            space_guid: &str,
        ) -> ActorResponse<Application> {
            self.app_calls
                .lock()
                .unwrap()
                .push((name.to_string(), space_guid.to_string()));
            self.respond(Application {
                guid: "some-app-guid".to_string(),
                name: name.to_string(),
                ..Default::default()
            })
        }

        async fn get_application_summary_by_name_and_space(
            &self,
            name: &str,
            space_guid: &str,
        ) -> ActorResponse<ApplicationSummary> {
            self.summary_calls
                .lock()
                .unwrap()
                .push((name.to_string(), space_guid.to_string()));
            self.respond(self.summary.clone())
        }
    }

    fn args(guid: bool) -> AppArgs {
        AppArgs {
            app_name: "some-app".to_string(),
            guid,
        }
    }

    fn summary(instances: Vec<ApplicationInstance>) -> ApplicationSummary {
        ApplicationSummary {
            application: Application {
                guid: "some-app-guid".to_string(),
                name: "some-app".to_string(),
                instances: 3,
                memory: 128,
                detected_buildpack: "some-buildpack".to_string(),
                package_updated_at: chrono::DateTime::from_timestamp(0, 0),
                ..Default::default()
            },
            stack: Stack {
                name: "potatos".to_string(),
            },
            routes: vec![
                Route {
                    host: "banana".to_string(),
                    domain: "fruit.com".to_string(),
                    path: "/hi".to_string(),
                    port: None,
                },
                Route {
                    domain: "foobar.com".to_string(),
                    port: Some(13),
                    ..Default::default()
                },
            ],
            running_instances: instances,
        }
    }

    fn instance(id: u32, state: InstanceState, cpu: f64, since: f64) -> ApplicationInstance {
        ApplicationInstance {
            id,
            state,
            cpu,
            memory: 100 * MEGABYTE,
            memory_quota: 128 * MEGABYTE,
            disk: 50 * MEGABYTE,
            disk_quota: 2048 * MEGABYTE,
            since,
        }
    }

    async fn run(
        args: &AppArgs,
        checker: &FakeChecker,
        config: &FakeConfig,
        actor: &FakeActor,
    ) -> (Result<(), CommandError>, BufferSink) {
        let mut ui = BufferSink::new();
        let result = app_command(args, checker, config, actor, &mut ui).await;
        (result, ui)
    }

    #[tokio::test]
    async fn test_target_failure_stops_before_any_output() {
        let checker = FakeChecker::failing(TargetError::NotLoggedIn {
            binary_name: "faceman".to_string(),
        });
        let actor = FakeActor::new(Outcome::Found);

        let (result, ui) = run(&args(false), &checker, &FakeConfig::new(), &actor).await;

        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Target(TargetError::NotLoggedIn { .. })));
        assert_eq!(err.to_string(), "Not logged in. Use 'faceman login' to log in.");
        assert_eq!(*checker.calls.lock().unwrap(), vec![(true, true)]);
        assert_eq!(actor.total_calls(), 0);
        assert!(ui.out.is_empty());
        assert!(ui.err.is_empty());
    }

    #[tokio::test]
    async fn test_current_user_error_is_returned() {
        let config = FakeConfig { user: None };
        let actor = FakeActor::new(Outcome::Found);

        let (result, ui) = run(&args(false), &FakeChecker::passing(), &config, &actor).await;

        assert!(matches!(
            result,
            Err(CommandError::Config(ConfigError::MissingField(_)))
        ));
        assert_eq!(actor.total_calls(), 0);
        assert!(ui.out.is_empty());
    }

    #[tokio::test]
    async fn test_guid_mode_prints_only_the_guid() {
        let actor = FakeActor::new(Outcome::Found);

        let (result, ui) = run(&args(true), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        assert!(result.is_ok());
        assert_eq!(ui.out, vec![FLAVOR, "", "some-app-guid"]);
        assert_eq!(ui.err, vec!["warning-1", "warning-2"]);
        assert_eq!(
            *actor.app_calls.lock().unwrap(),
            vec![("some-app".to_string(), "some-space-guid".to_string())]
        );
        assert!(actor.summary_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_guid_mode_not_found_is_translated() {
        let actor = FakeActor::new(Outcome::NotFound);

        let (result, ui) = run(&args(true), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        let err = result.unwrap_err();
        assert!(matches!(&err, CommandError::ApplicationNotFound { name } if name == "some-app"));
        assert_eq!(err.to_string(), "App some-app not found");
        assert_eq!(ui.err, vec!["warning-1", "warning-2"]);
        assert_eq!(ui.out, vec![FLAVOR, ""]);
    }

    #[tokio::test]
    async fn test_guid_mode_other_errors_pass_through() {
        let actor = FakeActor::new(Outcome::Failed("get app error"));

        let (result, ui) = run(&args(true), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Provider(_)));
        assert_eq!(err.to_string(), "get app error");
        assert_eq!(ui.err, vec!["warning-1", "warning-2"]);
    }

    #[tokio::test]
    async fn test_summary_without_instances() {
        let actor = FakeActor::with_summary(summary(Vec::new()));

        let (result, ui) = run(&args(false), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        assert!(result.is_ok());
        assert_eq!(ui.out[0], FLAVOR);
        assert_eq!(ui.out[1], "");
        assert!(ui.out[2].starts_with("Name:"));
        assert!(ui.out[2].ends_with("some-app"));
        assert!(ui.stdout().contains("banana.fruit.com/hi, foobar.com:13"));
        assert!(ui.stdout().contains("1970-01-01T00:00:00Z"));
        assert_eq!(ui.out.last().map(String::as_str), Some(NO_RUNNING_INSTANCES));
        assert!(!ui.stdout().contains("State"));
        assert_eq!(ui.err, vec!["warning-1", "warning-2"]);
        assert_eq!(
            *actor.summary_calls.lock().unwrap(),
            vec![("some-app".to_string(), "some-space-guid".to_string())]
        );
        assert!(actor.app_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_with_instances() {
        let actor = FakeActor::with_summary(summary(vec![
            instance(0, InstanceState::Running, 0.73, 1403140717.984577),
            instance(1, InstanceState::Crashed, 0.37, 1403100000.900000),
        ]));

        let (result, ui) = run(&args(false), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        assert!(result.is_ok());
        let rows: Vec<Vec<&str>> = ui
            .out
            .iter()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|fields| fields.first().is_some_and(|f| f.starts_with('#') && f.len() > 1))
            .collect();

        assert_eq!(
            rows,
            vec![
                vec![
                    "#0",
                    "running",
                    "2014-06-19T01:18:37Z",
                    "73.0%",
                    "100M",
                    "of",
                    "128M",
                    "50M",
                    "of",
                    "2G"
                ],
                vec![
                    "#1",
                    "crashed",
                    "2014-06-18T14:00:00Z",
                    "37.0%",
                    "100M",
                    "of",
                    "128M",
                    "50M",
                    "of",
                    "2G"
                ],
            ]
        );
        assert!(ui.stdout().contains("2/3"));
        assert!(!ui.stdout().contains(NO_RUNNING_INSTANCES));
    }

    #[tokio::test]
    async fn test_summary_not_found_is_translated() {
        let actor = FakeActor::new(Outcome::NotFound);

        let (result, ui) = run(&args(false), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        assert!(matches!(result, Err(CommandError::ApplicationNotFound { .. })));
        assert_eq!(ui.err, vec!["warning-1", "warning-2"]);
        assert_eq!(ui.out, vec![FLAVOR, ""]);
    }

    #[tokio::test]
    async fn test_summary_other_errors_pass_through() {
        let actor = FakeActor::new(Outcome::Failed("get app summary error"));

        let (result, _ui) = run(&args(false), &FakeChecker::passing(), &FakeConfig::new(), &actor).await;

        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Provider(_)));
        assert_eq!(err.to_string(), "get app summary error");
    }

    #[test]
    fn test_query_from_args() {
        assert_eq!(AppQuery::from(&args(true)), AppQuery::Guid);
        assert_eq!(AppQuery::from(&args(false)), AppQuery::Summary);
    }
}
