//! Collaborator traits consumed by commands

mod provider;
mod session;
mod target;

pub use provider::{ActorResponse, AppDataProvider};
pub use session::SessionConfig;
pub use target::TargetChecker;
