//! JSON formatter implementation.

use crate::formatters::Formatter;
use anyhow::Result;
use dashboard_transport::ItemResult;
use grafana_client::SearchHit;
use transporter_config::Environment;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_environments(&self, environments: &[Environment]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(environments)?;
        out.push('\n');
        Ok(out)
    }

    fn format_dashboards(&self, dashboards: &[SearchHit]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(dashboards)?;
        out.push('\n');
        Ok(out)
    }

    fn format_results(&self, results: &[ItemResult]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(results)?;
        out.push('\n');
        Ok(out)
    }
}
