//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Translate a handler's outcome into an exit code.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use transporter_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::error::ExitCode;

pub(crate) async fn run_command(
    cli: Cli,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<ExitCode> {
    let output_file = cli.output_file.as_deref();
    match cli.command {
        Commands::Environments => {
            commands::environments::run(config, cli.output, output_file)?;
            Ok(ExitCode::Success)
        }
        Commands::Dashboards { env, query } => {
            let query = query.as_deref().unwrap_or_default();
            commands::dashboards::run(config, &env, query, cli.output, output_file, cancel).await?;
            Ok(ExitCode::Success)
        }
        Commands::Migrate(args) => {
            commands::migrate::run(config, *args, cli.output, output_file, cli.quiet, cancel).await
        }
        Commands::Export { env, uid, sanitize } => {
            commands::export::run(config, &env, &uid, sanitize, output_file, cancel).await?;
            Ok(ExitCode::Success)
        }
    }
}
