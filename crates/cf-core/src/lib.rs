//! cf-core: Core abstractions and configuration for the cf client
//!
//! This crate provides the domain types returned by the cloud controller,
//! the collaborator traits consumed by commands, the error taxonomy and the
//! on-disk session configuration.

pub mod config;
pub mod error;
pub mod time;
pub mod traits;
pub mod types;

pub use error::{ActorError, ConfigError, TargetError};
pub use types::{Application, ApplicationInstance, ApplicationSummary, InstanceState, Warnings};
