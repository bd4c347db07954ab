//! cf-cli: Command-line interface for the cloud platform
//!
//! Provides the `cf` binary. Commands are written against the collaborator
//! traits from `cf-core` so they can run against the real cloud controller
//! or against in-memory fakes.

pub mod commands;
pub mod error;
pub mod output;
pub mod target;
pub mod ui;

pub use error::CommandError;
