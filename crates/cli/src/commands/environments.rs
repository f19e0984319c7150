//! Environments command implementation.
//!
//! Lists the configured Grafana environments. Credentials are never printed;
//! the table only says whether they are present.

use anyhow::Result;
use std::path::Path;
use transporter_config::Config;

use crate::args::OutputFormat;
use crate::formatters::{get_formatter, output_result};

pub fn run(config: &Config, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let formatter = get_formatter(format);
    let output = formatter.format_environments(&config.environments)?;
    output_result(&output, output_file)
}
