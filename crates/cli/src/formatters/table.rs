//! Table formatter implementation.
//!
//! Tables are tab-separated with a header row.

use crate::formatters::Formatter;
use anyhow::Result;
use dashboard_transport::ItemResult;
use grafana_client::SearchHit;
use transporter_config::Environment;

const MISSING: &str = "-";

/// Collapse control whitespace so a value stays within its cell.
fn cell(value: &str) -> String {
    value
        .split(['\n', '\r', '\t'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_environments(&self, environments: &[Environment]) -> Result<String> {
        if environments.is_empty() {
            return Ok("No environments configured.\n".to_string());
        }

        let mut output = String::from("ID\tNAME\tURL\tCREDENTIALS\n");
        for env in environments {
            let credentials = match env.credentials() {
                Ok(_) => "yes",
                Err(_) => "missing",
            };
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                env.id, env.name, env.url, credentials
            ));
        }
        Ok(output)
    }

    fn format_dashboards(&self, dashboards: &[SearchHit]) -> Result<String> {
        if dashboards.is_empty() {
            return Ok("No dashboards found.\n".to_string());
        }

        let mut output = String::from("ID\tUID\tTITLE\n");
        for hit in dashboards {
            output.push_str(&format!("{}\t{}\t{}\n", hit.id, hit.uid, cell(&hit.title)));
        }
        Ok(output)
    }

    fn format_results(&self, results: &[ItemResult]) -> Result<String> {
        if results.is_empty() {
            return Ok("No dashboards processed.\n".to_string());
        }

        let mut output = String::from("SOURCE UID\tTARGET UID\tSTATUS\tMESSAGE\n");
        for result in results {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                result.source_uid,
                result.target_uid.as_deref().unwrap_or(MISSING),
                result.status.as_str(),
                result.message.as_deref().map(cell).as_deref().unwrap_or(MISSING),
            ));
        }
        Ok(output)
    }
}
