//! cf-api: Cloud controller v2 client for the cf client
//!
//! This crate speaks the cloud controller's JSON API over HTTP and turns
//! its resources into the domain types defined in `cf-core`.

pub mod actor;
pub mod client;
pub mod error;
pub mod resources;

pub use actor::CloudControllerActor;
pub use client::{CcResponse, CloudControllerClient, WARNINGS_HEADER};
pub use error::CcError;
