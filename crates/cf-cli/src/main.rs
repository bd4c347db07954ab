//! cf CLI
//!
//! Command-line client for a cloud application platform:
//! - `app` shows the health and status of an application
//! - `config` manages the local session configuration

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cf_api::CloudControllerActor;
use cf_cli::commands::{self, AppArgs};
use cf_cli::output::print_error;
use cf_cli::target::{binary_name_from_args, ConfigTargetChecker};
use cf_cli::ui::TerminalSink;
use cf_cli::CommandError;
use cf_core::config;
use cf_core::traits::SessionConfig;

#[derive(Parser)]
#[command(name = "cf")]
#[command(author, version, about = "Cloud application platform command-line client")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = config::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display health and status for an app
    App(AppArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Show config file path
    Path,
    /// Write a configuration template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    tracing::debug!("Using config file {:?}", config_path);

    match cli.command {
        Commands::App(args) => app(&args, &config_path).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config_path)?,
            ConfigAction::Path => commands::config_path(&config_path)?,
            ConfigAction::Init { force } => commands::config_init(&config_path, force)?,
        },
    }

    Ok(())
}

async fn app(args: &AppArgs, config_path: &std::path::Path) -> Result<(), CommandError> {
    let session = config::load_or_default(config_path)?;
    let checker = ConfigTargetChecker::new(&session, binary_name_from_args());

    let actor = CloudControllerActor::from_config(&session.api, session.access_token());
    let mut ui = TerminalSink::new();

    commands::app_command(args, &checker, &session, &actor, &mut ui).await
}
