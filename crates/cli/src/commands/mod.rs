//! CLI command implementations.

pub mod dashboards;
pub mod environments;
pub mod export;
pub mod migrate;

use anyhow::Result;
use dashboard_transport::ClientRegistry;
use tokio::select;
use transporter_config::Config;

use crate::cancellation::{CancellationToken, Cancelled};

/// Build one client per configured environment.
pub fn build_registry(config: &Config) -> ClientRegistry {
    ClientRegistry::from_config(config)
}

/// Await `fut` unless the user cancels first.
pub async fn cancellable<T>(
    fut: impl std::future::Future<Output = T>,
    cancel: &CancellationToken,
) -> Result<T> {
    select! {
        value = fut => Ok(value),
        _ = cancel.cancelled() => Err(Cancelled.into()),
    }
}
