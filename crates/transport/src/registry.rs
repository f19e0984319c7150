//! Environment id to client mapping.

use crate::error::BatchError;
use grafana_client::{GrafanaClient, GrafanaClientBuilder};
use std::collections::BTreeMap;
use transporter_config::{Config, ConnectionConfig, Environment};

/// Source of ready-to-use clients, keyed by environment id.
pub trait EnvironmentRegistry {
    fn client(&self, env_id: &str) -> Result<&GrafanaClient, BatchError>;
}

/// Clients built from the process configuration.
///
/// Environments that are configured but cannot produce a client (for
/// example because credentials are missing) are kept with the reason, so a
/// batch naming them fails with a precise message rather than "unknown".
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    entries: BTreeMap<String, Result<GrafanaClient, String>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one client per configured environment.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for env in &config.environments {
            let client = build_client(env, &config.connection);
            if let Err(reason) = &client {
                tracing::warn!(env = %env.id, %reason, "environment unusable");
            }
            registry.entries.insert(env.id.clone(), client);
        }
        tracing::debug!(environments = ?registry.ids().collect::<Vec<_>>(), "client registry ready");
        registry
    }

    /// Register (or replace) a client under `id`.
    pub fn insert(&mut self, id: impl Into<String>, client: GrafanaClient) {
        self.entries.insert(id.into(), Ok(client));
    }

    pub fn with_client(mut self, id: impl Into<String>, client: GrafanaClient) -> Self {
        self.insert(id, client);
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn build_client(env: &Environment, connection: &ConnectionConfig) -> Result<GrafanaClient, String> {
    GrafanaClientBuilder::new()
        .from_environment(env, connection)
        .and_then(GrafanaClientBuilder::build)
        .map_err(|e| e.to_string())
}

/// Build the client for a single environment, without touching the others.
pub fn client_for(config: &Config, env_id: &str) -> Result<GrafanaClient, BatchError> {
    let env = config
        .environment(env_id)
        .ok_or_else(|| BatchError::UnknownEnvironment(env_id.to_string()))?;
    build_client(env, &config.connection).map_err(|reason| BatchError::EnvironmentUnavailable {
        env: env_id.to_string(),
        reason,
    })
}

impl EnvironmentRegistry for ClientRegistry {
    fn client(&self, env_id: &str) -> Result<&GrafanaClient, BatchError> {
        match self.entries.get(env_id) {
            Some(Ok(client)) => Ok(client),
            Some(Err(reason)) => Err(BatchError::EnvironmentUnavailable {
                env: env_id.to_string(),
                reason: reason.clone(),
            }),
            None => Err(BatchError::UnknownEnvironment(env_id.to_string())),
        }
    }
}
