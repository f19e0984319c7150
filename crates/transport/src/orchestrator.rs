//! Batch migration driver.

use crate::error::{BatchError, MigrationError};
use crate::model::{BatchRequest, BatchSummary, ItemResult};
use crate::registry::{ClientRegistry, EnvironmentRegistry};
use crate::requesters::parse_requesters;
use crate::resolver::Resolution;
use crate::{fetcher, importer, reconciler, resolver, sanitizer};
use grafana_client::{GrafanaClient, PermissionLevel};
use tracing::Instrument;

/// Runs batch migrations against a fixed set of environments.
#[derive(Debug, Clone)]
pub struct Migrator<R = ClientRegistry> {
    registry: R,
}

/// Everything an item needs that is shared across the batch.
struct BatchContext<'a> {
    source: GrafanaClient,
    target: GrafanaClient,
    folder_uid: &'a str,
    requesters: Vec<String>,
    permission: PermissionLevel,
}

/// A dashboard that is now on the target.
struct Imported {
    target_uid: String,
    import_id: Option<i64>,
    title: String,
}

impl<R: EnvironmentRegistry> Migrator<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Migrate every uid in `request`, in order.
    ///
    /// Returns one [`ItemResult`] per uid, in input order. Only request-level
    /// problems (malformed request, unknown or unusable environment) produce
    /// an `Err`, and those are detected before any dashboard is touched.
    pub async fn run_batch(&self, request: &BatchRequest) -> Result<Vec<ItemResult>, BatchError> {
        request.validate()?;

        let mut source = self.registry.client(request.source_env.trim())?.clone();
        let mut target = self.registry.client(request.target_env.trim())?.clone();
        if let Some(org_id) = request.org_id.as_deref().map(str::trim) {
            source = source.with_org_id(org_id);
            target = target.with_org_id(org_id);
        }

        let ctx = BatchContext {
            source,
            target,
            folder_uid: request.folder_uid.trim(),
            requesters: parse_requesters(&request.requested_by),
            permission: request.permission,
        };

        tracing::info!(
            source_env = %request.source_env,
            target_env = %request.target_env,
            items = request.uids.len(),
            requesters = ctx.requesters.len(),
            "starting batch"
        );

        let mut results = Vec::with_capacity(request.uids.len());
        for uid in &request.uids {
            let uid = uid.trim();
            let span = tracing::info_span!("migrate_dashboard", source_uid = %uid);
            results.push(migrate_one(&ctx, uid).instrument(span).await);
        }

        let summary = BatchSummary::from_results(&results);
        tracing::info!(
            ok = summary.ok,
            warning = summary.warning,
            error = summary.error,
            "batch finished"
        );
        Ok(results)
    }
}

async fn migrate_one(ctx: &BatchContext<'_>, uid: &str) -> ItemResult {
    let imported = match copy_dashboard(ctx, uid).await {
        Ok(imported) => imported,
        Err(err) => return failure_result(uid, None, &err),
    };

    if ctx.requesters.is_empty() {
        tracing::info!(target_uid = %imported.target_uid, "imported; no requesters");
        return ItemResult::warning(uid, imported.target_uid, "import ok; rbac skipped".into());
    }

    match grant_access(ctx, &imported).await {
        Ok(resolution) => {
            tracing::info!(
                target_uid = %imported.target_uid,
                dashboard_id = resolution.id,
                status = "ok",
                "dashboard migrated"
            );
            ItemResult::ok(uid, imported.target_uid)
        }
        Err(err) => failure_result(uid, Some(imported.target_uid), &err),
    }
}

/// Error when the dashboard never reached the target, warning otherwise.
fn failure_result(uid: &str, target_uid: Option<String>, err: &MigrationError) -> ItemResult {
    match target_uid {
        Some(target_uid) if !err.is_fatal() => {
            tracing::warn!(error = %err, "imported without full permissions");
            ItemResult::warning(uid, target_uid, format!("import ok; {err}"))
        }
        _ => {
            tracing::warn!(error = %err, "dashboard not migrated");
            ItemResult::error(uid, err.to_string())
        }
    }
}

/// Fetch, sanitize and import.
async fn copy_dashboard(ctx: &BatchContext<'_>, uid: &str) -> Result<Imported, MigrationError> {
    let source = fetcher::fetch(&ctx.source, uid)
        .await
        .map_err(MigrationError::SourceFetch)?;

    let definition = sanitizer::sanitize(source.definition);
    let outcome = importer::import(&ctx.target, definition, ctx.folder_uid)
        .await
        .map_err(MigrationError::TargetImport)?;

    Ok(Imported {
        target_uid: outcome.uid.unwrap_or_else(|| uid.to_string()),
        import_id: outcome.id,
        title: source.title,
    })
}

/// Resolve the target id and reconcile permissions.
async fn grant_access(
    ctx: &BatchContext<'_>,
    imported: &Imported,
) -> Result<Resolution, MigrationError> {
    let resolution = resolver::resolve(
        &ctx.target,
        &imported.target_uid,
        imported.import_id,
        &imported.title,
    )
    .await
    .map_err(MigrationError::Resolve)?;
    tracing::debug!(dashboard_id = resolution.id, via = %resolution.via, "resolved target id");

    reconciler::reconcile(&ctx.target, resolution.id, &ctx.requesters, ctx.permission)
        .await
        .map_err(MigrationError::Reconcile)?;
    Ok(resolution)
}
