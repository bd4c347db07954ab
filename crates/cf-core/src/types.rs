//! Core domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal advisory messages returned alongside every actor outcome
pub type Warnings = Vec<String>;

/// A targeted organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

/// A targeted space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub guid: String,
    pub name: String,
}

/// The logged in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
}

/// Desired state of an application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationState {
    Started,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Application record as known by the cloud controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub guid: String,
    pub name: String,
    /// Desired number of instances
    pub instances: u32,
    /// Memory per instance in megabytes
    pub memory: u64,
    pub state: ApplicationState,
    pub stack_guid: String,
    pub detected_buildpack: String,
    /// Last time a package was uploaded for this app
    pub package_updated_at: Option<DateTime<Utc>>,
}

impl Application {
    pub fn is_started(&self) -> bool {
        self.state == ApplicationState::Started
    }
}

/// Stack the application runs on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
}

/// A route mapped to an application
///
/// A route either carries a host and path (HTTP route) or a port
/// (TCP route), never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub host: String,
    pub domain: String,
    pub path: String,
    pub port: Option<u16>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.host.is_empty() {
            write!(f, "{}.", self.host)?;
        }
        write!(f, "{}", self.domain)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        if !self.path.is_empty() {
            if !self.path.starts_with('/') {
                write!(f, "/")?;
            }
            write!(f, "{}", self.path)?;
        }
        Ok(())
    }
}

/// Runtime state of a single application instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Running,
    Crashed,
    Starting,
    Down,
    Flapping,
    #[default]
    Unknown,
}

impl InstanceState {
    /// Parse a state as reported by the cloud controller (e.g. `RUNNING`)
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "RUNNING" => InstanceState::Running,
            "CRASHED" => InstanceState::Crashed,
            "STARTING" => InstanceState::Starting,
            "DOWN" => InstanceState::Down,
            "FLAPPING" => InstanceState::Flapping,
            _ => InstanceState::Unknown,
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceState::Running => write!(f, "running"),
            InstanceState::Crashed => write!(f, "crashed"),
            InstanceState::Starting => write!(f, "starting"),
            InstanceState::Down => write!(f, "down"),
            InstanceState::Flapping => write!(f, "flapping"),
            InstanceState::Unknown => write!(f, "unknown"),
        }
    }
}

/// A reported application instance with its resource usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInstance {
    /// Instance index
    pub id: u32,
    pub state: InstanceState,
    /// CPU usage as a fraction (0.73 = 73%)
    pub cpu: f64,
    /// Memory usage in bytes
    pub memory: u64,
    pub memory_quota: u64,
    /// Disk usage in bytes
    pub disk: u64,
    pub disk_quota: u64,
    /// Unix timestamp (fractional seconds) of the last state change
    pub since: f64,
}

/// Everything the `app` report shows about one application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub application: Application,
    pub stack: Stack,
    pub routes: Vec<Route>,
    /// Instances in the order the cloud controller reported them
    pub running_instances: Vec<ApplicationInstance>,
}

impl ApplicationSummary {
    /// Number of instances the cloud controller reported
    pub fn reported_instances(&self) -> usize {
        self.running_instances.len()
    }
}
