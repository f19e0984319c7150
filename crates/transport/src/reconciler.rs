//! Permission reconciliation on the target dashboard.
//!
//! Grafana's permission write replaces the entire list, so granting access
//! is a read-merge-write: read the current list, replace or add the
//! requesters' user entries and re-emit every other entry untouched. The
//! merged list is written once per dashboard regardless of how many
//! requesters were named.

use grafana_client::{
    ClientError, DashboardPermission, Grantee, GrafanaClient, PermissionItem, PermissionLevel,
};
use std::collections::HashSet;
use thiserror::Error;

/// A requester that resolved to a target user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGrantee {
    pub requester: String,
    pub user_id: i64,
}

#[derive(Debug, Error)]
pub enum LookupReason {
    #[error("user not found")]
    NotFound,
    /// Lookup answered but without a usable id.
    #[error("lookup returned no user id")]
    NoUserId,
    #[error("{0}")]
    Failed(ClientError),
}

/// A requester that could not be resolved on the target.
#[derive(Debug, Error)]
#[error("{requester}: {reason}")]
pub struct LookupFailure {
    pub requester: String,
    pub reason: LookupReason,
}

/// Grants written to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedGrants {
    pub dashboard_id: i64,
    pub granted: Vec<ResolvedGrantee>,
    pub level: PermissionLevel,
    /// Size of the full list that was written.
    pub items_written: usize,
}

/// Reconciliation did not fully succeed. The dashboard itself is unaffected.
#[derive(Debug, Error)]
pub enum ReconcileWarning {
    /// No requester resolved; nothing was read or written.
    #[error("no requester resolved ({})", join_failures(.0))]
    NoGranteesResolved(Vec<LookupFailure>),

    /// Some requesters resolved and were granted, the rest were not.
    #[error("{}", partial_message(.applied, .failures))]
    PartialLookup {
        applied: AppliedGrants,
        failures: Vec<LookupFailure>,
    },

    #[error("get perms: {0}")]
    ReadFailed(ClientError),

    #[error("post perms: {0}")]
    WriteFailed(ClientError),
}

fn join_failures(failures: &[LookupFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn partial_message(applied: &AppliedGrants, failures: &[LookupFailure]) -> String {
    format!(
        "granted {} of {} requester(s); unresolved: {}",
        applied.granted.len(),
        applied.granted.len() + failures.len(),
        join_failures(failures)
    )
}

/// Resolve each requester to a target user id, one lookup per requester.
///
/// Failures are collected, not propagated. Requesters resolving to a user id
/// already seen are folded into the first.
pub async fn lookup_grantees(
    client: &GrafanaClient,
    requesters: &[String],
) -> (Vec<ResolvedGrantee>, Vec<LookupFailure>) {
    let mut resolved: Vec<ResolvedGrantee> = Vec::with_capacity(requesters.len());
    let mut failures = Vec::new();

    for requester in requesters {
        let reason = match client.lookup_user(requester).await {
            Ok(user) if user.id > 0 => {
                if resolved.iter().all(|r| r.user_id != user.id) {
                    resolved.push(ResolvedGrantee {
                        requester: requester.clone(),
                        user_id: user.id,
                    });
                }
                continue;
            }
            Ok(_) => LookupReason::NoUserId,
            Err(err) if err.is_not_found() => LookupReason::NotFound,
            Err(err) => LookupReason::Failed(err),
        };
        tracing::debug!(requester = %requester, "requester lookup failed");
        failures.push(LookupFailure {
            requester: requester.clone(),
            reason,
        });
    }

    (resolved, failures)
}

/// Merge target user grants into an existing permission list.
///
/// Existing entries for a target user are replaced in place with `level`;
/// every other entry (other users, teams, roles) keeps its grantee and level.
/// Target users with no existing entry are appended in `user_ids` order. A
/// user never appears twice in the output. Entries without a grantee or level
/// are dropped.
pub fn merge_grants(
    existing: &[DashboardPermission],
    user_ids: &[i64],
    level: PermissionLevel,
) -> Vec<PermissionItem> {
    let targets: HashSet<i64> = user_ids.iter().copied().collect();
    let mut emitted_users = HashSet::new();
    let mut items = Vec::with_capacity(existing.len() + user_ids.len());

    for entry in existing {
        let Some(item) = entry.to_item() else {
            continue;
        };
        match item.grantee {
            Grantee::User(id) if targets.contains(&id) => {
                if emitted_users.insert(id) {
                    items.push(PermissionItem {
                        grantee: Grantee::User(id),
                        permission: level,
                    });
                }
            }
            _ => items.push(item),
        }
    }

    for id in user_ids {
        if emitted_users.insert(*id) {
            items.push(PermissionItem {
                grantee: Grantee::User(*id),
                permission: level,
            });
        }
    }

    items
}

/// Grant `level` on `dashboard_id` to every resolvable requester.
///
/// Reads the current list once and writes the merged list once. Partial
/// lookup failure still writes the grants that did resolve.
pub async fn reconcile(
    client: &GrafanaClient,
    dashboard_id: i64,
    requesters: &[String],
    level: PermissionLevel,
) -> Result<AppliedGrants, ReconcileWarning> {
    let (granted, failures) = lookup_grantees(client, requesters).await;
    if granted.is_empty() {
        return Err(ReconcileWarning::NoGranteesResolved(failures));
    }

    let existing = client
        .get_dashboard_permissions(dashboard_id)
        .await
        .map_err(ReconcileWarning::ReadFailed)?;

    let user_ids: Vec<i64> = granted.iter().map(|g| g.user_id).collect();
    let items = merge_grants(&existing, &user_ids, level);
    let items_written = items.len();

    client
        .update_dashboard_permissions(dashboard_id, items)
        .await
        .map_err(ReconcileWarning::WriteFailed)?;

    tracing::info!(
        dashboard_id,
        granted = granted.len(),
        items_written,
        %level,
        "permissions reconciled"
    );

    let applied = AppliedGrants {
        dashboard_id,
        granted,
        level,
        items_written,
    };
    if failures.is_empty() {
        Ok(applied)
    } else {
        Err(ReconcileWarning::PartialLookup { applied, failures })
    }
}
