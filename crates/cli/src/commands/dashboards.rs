//! Dashboards command implementation.
//!
//! Lists the dashboards of one environment so their uids can be handed to
//! `migrate` or `export`. Folders and other search hit types are skipped.

use anyhow::{Context, Result};
use dashboard_transport::client_for;
use std::path::Path;
use tracing::info;
use transporter_config::Config;

use crate::args::OutputFormat;
use crate::cancellation::CancellationToken;
use crate::commands::cancellable;
use crate::formatters::{get_formatter, output_result};

pub async fn run(
    config: &Config,
    env: &str,
    query: &str,
    format: OutputFormat,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(env, query, "listing dashboards");

    let client = client_for(config, env)?;
    let mut hits = cancellable(client.search_dashboards(query), cancel)
        .await?
        .with_context(|| format!("Failed to list dashboards in {env}"))?;
    hits.retain(|hit| hit.is_dashboard());

    let output = get_formatter(format).format_dashboards(&hits)?;
    output_result(&output, output_file)
}
