//! Export command implementation.
//!
//! Prints a dashboard definition from one environment as pretty JSON. The
//! output is always JSON regardless of `--output`.

use anyhow::{Context, Result};
use dashboard_transport::{client_for, fetcher, sanitizer};
use std::path::Path;
use tracing::info;
use transporter_config::Config;

use crate::cancellation::CancellationToken;
use crate::commands::cancellable;
use crate::formatters::output_result;

pub async fn run(
    config: &Config,
    env: &str,
    uid: &str,
    sanitize: bool,
    output_file: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(env, uid, "exporting dashboard");

    let client = client_for(config, env)?;

    let source = cancellable(fetcher::fetch(&client, uid), cancel)
        .await?
        .with_context(|| format!("Failed to export dashboard '{uid}' from {env}"))?;

    let definition = if sanitize {
        sanitizer::sanitize(source.definition)
    } else {
        source.definition
    };

    let mut output = serde_json::to_string_pretty(&definition)?;
    output.push('\n');
    output_result(&output, output_file)
}
