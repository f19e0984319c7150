//! Configuration type definitions for Dashboard Transporter.
//!
//! Responsibilities:
//! - Define the per-instance [`Environment`] entry and its credential pair.
//! - Define the shared [`ConnectionConfig`] applied to every instance.
//! - Combine both into the process-wide [`Config`] registry.
//!
//! Does NOT handle:
//! - Reading environment variables or `.env` files (see `loader` module).
//! - Network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serializing an [`Environment`] never emits credentials.

mod connection;
mod environment;

pub use connection::{Config, ConnectionConfig};
pub use environment::{Credentials, Environment};
