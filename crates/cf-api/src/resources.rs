//! Cloud controller v2 wire resources
//!
//! Only the fields the CLI displays are modeled; everything else in the
//! JSON bodies is ignored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use cf_core::types::{
    Application, ApplicationInstance, ApplicationState, InstanceState, Route, Stack,
};

/// Page of resources returned by list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub total_results: u64,
    pub resources: Vec<Resource<T>>,
}

/// A `{ metadata, entity }` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<T> {
    pub metadata: Metadata,
    pub entity: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub guid: String,
}

/// `entity` of an app resource
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntity {
    pub name: String,
    #[serde(default)]
    pub instances: u32,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub state: ApplicationState,
    #[serde(default)]
    pub stack_guid: String,
    #[serde(default)]
    pub buildpack: Option<String>,
    #[serde(default)]
    pub detected_buildpack: Option<String>,
    #[serde(default)]
    pub package_updated_at: Option<DateTime<Utc>>,
}

impl From<Resource<AppEntity>> for Application {
    fn from(resource: Resource<AppEntity>) -> Self {
        let entity = resource.entity;
        // A user-provided buildpack wins over the detected one
        let detected_buildpack = entity
            .buildpack
            .filter(|b| !b.is_empty())
            .or(entity.detected_buildpack)
            .unwrap_or_default();

        Application {
            guid: resource.metadata.guid,
            name: entity.name,
            instances: entity.instances,
            memory: entity.memory,
            state: entity.state,
            stack_guid: entity.stack_guid,
            detected_buildpack,
            package_updated_at: entity.package_updated_at,
        }
    }
}

/// Body of `GET /v2/apps/:guid/summary`
#[derive(Debug, Clone, Deserialize)]
pub struct AppSummaryBody {
    #[serde(default)]
    pub routes: Vec<SummaryRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRoute {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub port: Option<u16>,
    pub domain: SummaryDomain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDomain {
    pub name: String,
}

impl From<SummaryRoute> for Route {
    fn from(route: SummaryRoute) -> Self {
        Route {
            host: route.host,
            domain: route.domain.name,
            path: route.path,
            port: route.port.filter(|p| *p != 0),
        }
    }
}

/// `entity` of a stack resource
#[derive(Debug, Clone, Deserialize)]
pub struct StackEntity {
    pub name: String,
}

impl From<Resource<StackEntity>> for Stack {
    fn from(resource: Resource<StackEntity>) -> Self {
        Stack {
            name: resource.entity.name,
        }
    }
}

/// One entry of `GET /v2/apps/:guid/instances`, keyed by index
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceEntry {
    pub state: String,
    #[serde(default)]
    pub since: f64,
}

/// One entry of `GET /v2/apps/:guid/stats`, keyed by index
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEntry {
    #[serde(default)]
    pub stats: Option<InstanceStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceStats {
    pub usage: Usage,
    #[serde(default)]
    pub mem_quota: u64,
    #[serde(default)]
    pub disk_quota: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub mem: u64,
    #[serde(default)]
    pub disk: u64,
}

/// Merge the instance and stats maps into instances ordered by index.
///
/// States come from the instances map; usage comes from stats when the
/// cloud controller reported any for that index. Keys that are not
/// numeric are skipped.
pub fn merge_instances(
    instances: HashMap<String, InstanceEntry>,
    mut stats: HashMap<String, StatsEntry>,
) -> Vec<ApplicationInstance> {
    let mut merged: Vec<ApplicationInstance> = instances
        .into_iter()
        .filter_map(|(key, entry)| {
            let id = key.parse::<u32>().ok()?;
            let mut instance = ApplicationInstance {
                id,
                state: InstanceState::parse(&entry.state),
                since: entry.since,
                ..Default::default()
            };
            if let Some(usage) = stats.remove(&key).and_then(|s| s.stats) {
                instance.cpu = usage.usage.cpu;
                instance.memory = usage.usage.mem;
                instance.disk = usage.usage.disk;
                instance.memory_quota = usage.mem_quota;
                instance.disk_quota = usage.disk_quota;
            }
            Some(instance)
        })
        .collect();

    merged.sort_by_key(|instance| instance.id);
    merged
}

/// Error body returned by the cloud controller
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub error_code: String,
}
