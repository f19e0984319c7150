//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::migrate::MigrateArgs;

#[derive(Parser)]
#[command(name = "dashboard-transporter")]
#[command(
    about = "Copy Grafana dashboards between environments and grant access to requesters",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dashboard-transporter environments\n  dashboard-transporter migrate --source dev --target prd --requested-by alice abc123\n  dashboard-transporter migrate --request batch.json --output json\n  dashboard-transporter dashboards --env dev --query sales\n  dashboard-transporter export --env dev abc123 > sales.json\n"
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Only report errors; suppress the per-batch summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Per-request timeout in seconds (overrides GRAFANA_TIMEOUT)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (overrides GRAFANA_SKIP_VERIFY)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configured Grafana environments
    Environments,

    /// List dashboards in an environment
    Dashboards {
        /// Environment to list
        #[arg(long = "env", short = 'e')]
        env: String,

        /// Only dashboards whose title matches this text
        #[arg(long)]
        query: Option<String>,
    },

    /// Migrate dashboards from one environment to another
    Migrate(Box<MigrateArgs>),

    /// Print a dashboard definition as JSON
    Export {
        /// Environment to read from
        #[arg(long = "env", short = 'e')]
        env: String,

        /// Dashboard uid
        uid: String,

        /// Strip instance-local fields, as an import would
        #[arg(long)]
        sanitize: bool,
    },
}
