//! Migrate command implementation.
//!
//! Responsibilities:
//! - Build a batch request from flags or a JSON request file.
//! - Run the batch and render per-item results.
//! - Turn the batch outcome into an exit code.
//!
//! Does NOT handle:
//! - Any per-dashboard logic (see the `dashboard-transport` crate).
//!
//! Invariants:
//! - Request files use the camelCase batch request shape.
//! - Item failures never abort the command; they only affect the exit code.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use dashboard_transport::{BatchRequest, BatchSummary, Migrator, PermissionLevel};
use std::path::{Path, PathBuf};
use tracing::info;
use transporter_config::Config;

use crate::args::OutputFormat;
use crate::cancellation::CancellationToken;
use crate::commands::{build_registry, cancellable};
use crate::error::ExitCode;
use crate::formatters::{get_formatter, output_result};

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["request", "source"])))]
pub struct MigrateArgs {
    /// Read the whole batch from a JSON request file
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["source", "target", "folder", "requested_by", "permission", "org_id", "uids"]
    )]
    pub request: Option<PathBuf>,

    /// Environment to copy from
    #[arg(short, long, requires = "target")]
    pub source: Option<String>,

    /// Environment to copy into
    #[arg(short, long, requires = "source")]
    pub target: Option<String>,

    /// Folder uid on the target (default folder when omitted)
    #[arg(short, long, value_name = "UID")]
    pub folder: Option<String>,

    /// Logins or emails to grant access, separated by commas, semicolons or spaces
    #[arg(short, long, value_name = "LIST")]
    pub requested_by: Option<String>,

    /// Level granted to requesters: view, edit, admin or a number
    #[arg(short, long)]
    pub permission: Option<PermissionLevel>,

    /// Organization id for both environments
    #[arg(long)]
    pub org_id: Option<String>,

    /// Dashboard uids to migrate
    #[arg(value_name = "UID", required_unless_present = "request")]
    pub uids: Vec<String>,
}

impl MigrateArgs {
    pub fn into_request(self) -> Result<BatchRequest> {
        if let Some(path) = &self.request {
            return read_request_file(path);
        }
        Ok(BatchRequest {
            source_env: self.source.unwrap_or_default(),
            target_env: self.target.unwrap_or_default(),
            folder_uid: self.folder.unwrap_or_default(),
            requested_by: self.requested_by.unwrap_or_default(),
            uids: self.uids,
            permission: self.permission.unwrap_or_default(),
            org_id: self.org_id,
        })
    }
}

fn read_request_file(path: &Path) -> Result<BatchRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid batch request in {}", path.display()))
}

pub async fn run(
    config: &Config,
    args: MigrateArgs,
    format: OutputFormat,
    output_file: Option<&Path>,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<ExitCode> {
    let request = args.into_request()?;
    info!(
        source = %request.source_env,
        target = %request.target_env,
        items = request.uids.len(),
        "migrating dashboards"
    );

    let migrator = Migrator::new(build_registry(config));
    let results = cancellable(migrator.run_batch(&request), cancel)
        .await?
        .context("Batch rejected")?;

    let formatter = get_formatter(format);
    output_result(&formatter.format_results(&results)?, output_file)?;

    let summary = BatchSummary::from_results(&results);
    if !quiet {
        eprintln!(
            "{} dashboard(s): {} ok, {} warning, {} error",
            summary.total(),
            summary.ok,
            summary.warning,
            summary.error
        );
    }
    Ok(ExitCode::from_summary(&summary))
}
