//! Upstream GitHub API client
//!
//! Translates internal calls into authenticated requests against the GitHub
//! REST API. All operations are read-only; no retries, no caching, transport
//! default timeouts.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Event, GitHubUser, RepoCommit, Repository, SearchItem, SearchResponse};

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT_VALUE: &str = "Open-Source-Contribution-Tracker";

/// Errors from the upstream GitHub API.
///
/// The display wraps the underlying cause; callers surface it verbatim without
/// classifying the failure reason.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Failed to fetch {0}: {1}")]
    Fetch(&'static str, #[source] reqwest::Error),
    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against `base_url`, attaching `token` to every request
    /// when present. A missing token is not an error; requests fall back to
    /// unauthenticated access with GitHub's lower rate limit.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder()
            .default_headers(build_headers(token))
            .build()
            .map_err(GitHubError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /users/{username}
    pub async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        self.get_json(&format!("/users/{username}"), &[], "user info")
            .await
    }

    /// GET /users/{username}/repos, sorted most-recently-updated first
    pub async fn get_user_repositories(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, GitHubError> {
        self.get_json(
            &format!("/users/{username}/repos"),
            &[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ],
            "repositories",
        )
        .await
    }

    /// GET /users/{username}/events, newest first (upstream order)
    pub async fn get_user_events(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Event>, GitHubError> {
        self.get_json(
            &format!("/users/{username}/events"),
            &[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
            "user events",
        )
        .await
    }

    /// Up to 100 pull requests authored by `username`, newest created first
    pub async fn get_user_pull_requests(
        &self,
        username: &str,
    ) -> Result<Vec<SearchItem>, GitHubError> {
        self.search_issues(&format!("author:{username} type:pr"), "pull requests")
            .await
    }

    /// Up to 100 issues authored by `username`, newest created first
    pub async fn get_user_issues(&self, username: &str) -> Result<Vec<SearchItem>, GitHubError> {
        self.search_issues(&format!("author:{username} type:issue"), "issues")
            .await
    }

    /// GET /repos/{owner}/{repo}/commits authored by `author`, optionally
    /// bounded by a since-timestamp
    pub async fn get_repository_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<RepoCommit>, GitHubError> {
        let mut query = vec![("author", author.to_string())];
        if let Some(since) = since {
            query.push(("since", since.to_rfc3339()));
        }
        self.get_json(&format!("/repos/{owner}/{repo}/commits"), &query, "commits")
            .await
    }

    async fn search_issues(
        &self,
        q: &str,
        what: &'static str,
    ) -> Result<Vec<SearchItem>, GitHubError> {
        let response: SearchResponse = self
            .get_json(
                "/search/issues",
                &[
                    ("q", q.to_string()),
                    ("sort", "created".to_string()),
                    ("order", "desc".to_string()),
                    ("per_page", "100".to_string()),
                ],
                what,
            )
            .await?;
        Ok(response.items)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &'static str,
    ) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| GitHubError::Fetch(what, e))?
            .error_for_status()
            .map_err(|e| GitHubError::Fetch(what, e))?;

        response.json().await.map_err(|e| GitHubError::Fetch(what, e))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn build_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_V3));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("token {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("GITHUB_TOKEN contains invalid header characters, ignoring it");
            }
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_without_token() {
        let headers = build_headers(None);

        assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_GITHUB_V3);
        assert_eq!(headers.get(USER_AGENT).unwrap(), USER_AGENT_VALUE);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_token() {
        let headers = build_headers(Some("ghp_abc123"));

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "token ghp_abc123");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client =
            GitHubClient::new("https://api.github.com/", None).expect("client creation failed");

        assert_eq!(client.base_url(), "https://api.github.com");
    }
}
