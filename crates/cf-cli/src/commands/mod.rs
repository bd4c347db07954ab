//! CLI command implementations

mod app;
mod config;

pub use app::{app_command, AppArgs, AppQuery};
pub use config::{config_init, config_path, config_show};
