//! Rendering of the `app` health and status report

use cf_core::time::{format_timestamp, format_unix_seconds};
use cf_core::types::{ApplicationInstance, ApplicationSummary};
use tabled::{settings::Style, Table, Tabled};

use super::units::{format_cpu, human_bytes};

/// Line shown in place of the instance table when nothing is reported
pub const NO_RUNNING_INSTANCES: &str = "There are no running instances of this app";

#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Since")]
    since: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Disk")]
    disk: String,
}

impl From<&ApplicationInstance> for InstanceRow {
    fn from(instance: &ApplicationInstance) -> Self {
        Self {
            index: format!("#{}", instance.id),
            state: instance.state.to_string(),
            since: format_unix_seconds(instance.since),
            cpu: format_cpu(instance.cpu),
            memory: format!(
                "{} of {}",
                human_bytes(instance.memory),
                human_bytes(instance.memory_quota)
            ),
            disk: format!(
                "{} of {}",
                human_bytes(instance.disk),
                human_bytes(instance.disk_quota)
            ),
        }
    }
}

/// Render a summary as the lines of the `app` report.
///
/// The header block comes first, then a blank line, then either the
/// instance table or [`NO_RUNNING_INSTANCES`].
pub fn render_summary(summary: &ApplicationSummary) -> Vec<String> {
    let app = &summary.application;

    let routes = summary
        .routes
        .iter()
        .map(|route| route.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let header = [
        ("Name:", app.name.clone()),
        (
            "Instances:",
            format!("{}/{}", summary.reported_instances(), app.instances),
        ),
        (
            "Usage:",
            format!("{}M x {} instances", app.memory, app.instances),
        ),
        ("Routes:", routes),
        (
            "Last uploaded:",
            app.package_updated_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
        ),
        ("Stack:", summary.stack.name.clone()),
        ("Buildpack:", app.detected_buildpack.clone()),
    ];

    let width = header.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = header
        .iter()
        .map(|(key, value)| {
            format!("{:<width$} {}", key, value, width = width)
                .trim_end()
                .to_string()
        })
        .collect();

    lines.push(String::new());

    if summary.running_instances.is_empty() {
        lines.push(NO_RUNNING_INSTANCES.to_string());
        return lines;
    }

    let rows: Vec<InstanceRow> = summary.running_instances.iter().map(InstanceRow::from).collect();
    let table = Table::new(rows).with(Style::blank()).to_string();
    lines.extend(
        table
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from),
    );

    lines
}
