//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table renderings of environments, dashboard listings
//!   and batch results.
//! - Route rendered output to stdout or a file.
//!
//! Does NOT handle:
//! - Logging (goes to stderr through `tracing`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No environments configured.` |
//!
//! ## Missing Value Handling
//!
//! JSON omits absent optional fields (matching the request/response wire
//! shape); tables print `-`.

use anyhow::Result;
use dashboard_transport::ItemResult;
use grafana_client::SearchHit;
use transporter_config::Environment;

use crate::args::OutputFormat;

mod common;
mod json;
mod table;

pub use common::output_result;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Renders command results for one output format.
pub trait Formatter {
    fn format_environments(&self, environments: &[Environment]) -> Result<String>;
    fn format_dashboards(&self, dashboards: &[SearchHit]) -> Result<String>;
    fn format_results(&self, results: &[ItemResult]) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
