//! Upstream GitHub shapes and the derived statistics documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub user profile, the subset of fields the client renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// Repository, the subset of fields consumed by the aggregator and client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub fork: bool,
    pub stargazers_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Public activity event attributed to a user by the GitHub events feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Envelope returned by the issue-search endpoint; only `items` is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

/// Issue or pull request as returned by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    pub repository_url: String,
    pub created_at: DateTime<Utc>,
}

/// Commit as returned by the repository commits endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Statistics document derived from one fan-out over the upstream API.
/// Computed per request, never stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionStats {
    pub total_events: usize,
    pub total_pull_requests: usize,
    pub total_issues: usize,
    pub total_repositories: usize,
    pub owned_repositories: usize,
    pub forked_repositories: usize,
    pub contribution_breakdown: ContributionBreakdown,
    /// Language name -> repository count, top 10 by descending count
    pub languages: Map<String, Value>,
    pub recent_activity: Vec<RecentActivity>,
}

/// Per-event-type counts over the fetched event window
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionBreakdown {
    pub push_events: u32,
    pub pull_request_events: u32,
    pub issue_events: u32,
    pub create_events: u32,
    pub fork_events: u32,
    pub watch_events: u32,
    pub other: u32,
}

impl ContributionBreakdown {
    /// Sum of all buckets, equals the number of events counted
    pub fn total(&self) -> u32 {
        self.push_events
            + self.pull_request_events
            + self.issue_events
            + self.create_events
            + self.fork_events
            + self.watch_events
            + self.other
    }
}

/// One event projected for the recent-activity list
#[derive(Debug, Serialize)]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: String,
    pub created_at: DateTime<Utc>,
}
