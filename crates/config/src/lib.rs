//! Configuration management for Dashboard Transporter.
//!
//! This crate provides the environment registry (one entry per platform
//! instance) and the shared connection settings, loaded from `.env` files
//! and process environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials, Environment};
