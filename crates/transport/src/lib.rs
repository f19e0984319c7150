//! Dashboard migration pipeline.
//!
//! Moves dashboard definitions from one Grafana instance to another and
//! re-grants access on the migrated copy. Each dashboard in a batch runs
//! through the same sequence:
//!
//! 1. [`fetcher::fetch`] the definition from the source instance
//! 2. [`sanitizer::sanitize`] it for import
//! 3. [`importer::import`] it into the target with overwrite semantics
//! 4. [`resolver::resolve`] the target-local numeric id
//! 5. [`reconciler::reconcile`] the target's permission list
//!
//! [`orchestrator::Migrator`] drives the sequence and turns every per-item
//! failure into an [`ItemResult`] so one dashboard never aborts the batch.

pub mod error;
pub mod fetcher;
pub mod importer;
pub mod model;
pub mod orchestrator;
pub mod reconciler;
pub mod registry;
pub mod requesters;
pub mod resolver;
pub mod sanitizer;

pub use error::{BatchError, MigrationError};
pub use grafana_client::PermissionLevel;
pub use model::{BatchRequest, BatchSummary, ItemResult, ItemStatus};
pub use orchestrator::Migrator;
pub use registry::{ClientRegistry, EnvironmentRegistry, client_for};
