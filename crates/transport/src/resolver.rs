//! Target-local dashboard id resolution.
//!
//! Permissions are addressed by the numeric id on the target instance,
//! which the import response does not always carry. Three strategies are
//! tried in order, each only if every earlier one came up empty:
//!
//! 1. the id echoed in the import response
//! 2. a direct lookup of the dashboard by uid
//! 3. a title search, accepting only a hit whose uid matches exactly

use grafana_client::{ClientError, GrafanaClient};
use std::fmt;
use thiserror::Error;

/// Which strategy produced the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    ImportResponse,
    UidLookup,
    TitleSearch,
}

impl fmt::Display for ResolveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ImportResponse => "import response",
            Self::UidLookup => "uid lookup",
            Self::TitleSearch => "title search",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub id: i64,
    pub via: ResolveStep,
}

/// Why a single strategy yielded nothing.
#[derive(Debug, Error)]
pub enum StepFailure {
    #[error("import response: no id")]
    NoIdInImportResponse,

    #[error("uid lookup: {0}")]
    LookupFailed(ClientError),

    #[error("uid lookup: no id in response")]
    LookupHadNoId,

    #[error("title search: empty title")]
    EmptyTitle,

    #[error("title search: {0}")]
    SearchFailed(ClientError),

    #[error("title search: no match for '{title}' among {hits} hit(s)")]
    NoSearchMatch { title: String, hits: usize },
}

impl StepFailure {
    pub fn step(&self) -> ResolveStep {
        match self {
            Self::NoIdInImportResponse => ResolveStep::ImportResponse,
            Self::LookupFailed(_) | Self::LookupHadNoId => ResolveStep::UidLookup,
            Self::EmptyTitle | Self::SearchFailed(_) | Self::NoSearchMatch { .. } => {
                ResolveStep::TitleSearch
            }
        }
    }
}

/// Every strategy failed. `attempts` holds one entry per step, in order.
#[derive(Debug, Error)]
#[error("dashboard id not found{}", fmt_attempts(.attempts))]
pub struct ResolveError {
    pub attempts: Vec<StepFailure>,
}

fn fmt_attempts(attempts: &[StepFailure]) -> String {
    if attempts.is_empty() {
        return String::new();
    }
    let reasons: Vec<String> = attempts.iter().map(ToString::to_string).collect();
    format!(" ({})", reasons.join("; "))
}

/// Resolve the target-local id of the dashboard just imported as `uid`.
pub async fn resolve(
    client: &GrafanaClient,
    uid: &str,
    import_id: Option<i64>,
    title: &str,
) -> Result<Resolution, ResolveError> {
    let mut attempts = Vec::with_capacity(3);

    match import_id.filter(|id| *id > 0) {
        Some(id) => {
            return Ok(Resolution {
                id,
                via: ResolveStep::ImportResponse,
            });
        }
        None => attempts.push(StepFailure::NoIdInImportResponse),
    }

    match client.get_dashboard_by_uid(uid).await {
        Ok(response) => match response.numeric_id() {
            Some(id) => {
                return Ok(Resolution {
                    id,
                    via: ResolveStep::UidLookup,
                });
            }
            None => attempts.push(StepFailure::LookupHadNoId),
        },
        Err(err) => {
            tracing::debug!(uid, error = %err, "uid lookup failed, falling back to title search");
            attempts.push(StepFailure::LookupFailed(err));
        }
    }

    let title = title.trim();
    if title.is_empty() {
        attempts.push(StepFailure::EmptyTitle);
        return Err(ResolveError { attempts });
    }

    match client.search_dashboards(title).await {
        Ok(hits) => {
            if let Some(hit) = hits.iter().find(|hit| hit.uid == uid && hit.id > 0) {
                return Ok(Resolution {
                    id: hit.id,
                    via: ResolveStep::TitleSearch,
                });
            }
            attempts.push(StepFailure::NoSearchMatch {
                title: title.to_string(),
                hits: hits.len(),
            });
        }
        Err(err) => attempts.push(StepFailure::SearchFailed(err)),
    }

    Err(ResolveError { attempts })
}
