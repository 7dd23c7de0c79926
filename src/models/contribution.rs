//! Tracked contribution records and their request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user-entered contribution record, owned exclusively by the store.
///
/// `id` and `created_at` are immutable after creation; `updated_at` is set on
/// every successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedContribution {
    pub id: u64,
    pub username: String,
    pub repository: String,
    /// Contribution type: pull_request, issue, commit, review, or any
    /// caller-supplied tag
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    /// in_progress, merged, closed or open
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload; username, repository and type must be non-empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContributionRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub repository: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Partial-update payload.
///
/// `repository`, `type` and `status` only take effect when supplied non-empty;
/// an empty string keeps the prior value. `title`, `url` and `notes` overwrite
/// whenever present, including with an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContributionRequest {
    pub repository: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Per-user summary over the stored records, computed fresh on each call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContributionStats {
    pub total: usize,
    pub by_type: Map<String, Value>,
    pub by_status: Map<String, Value>,
    /// The 5 most-recently-created records for the user
    pub recent_contributions: Vec<TrackedContribution>,
}
