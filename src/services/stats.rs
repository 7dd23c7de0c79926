//! Contribution statistics aggregator
//!
//! Fans out four independent upstream fetches for one username and reduces the
//! combined results into a single [`ContributionStats`] document.

use serde_json::{Map, Value};

use crate::models::{ContributionBreakdown, ContributionStats, Event, RecentActivity, Repository};
use crate::services::github::{GitHubClient, GitHubError};

/// Window of events and repositories fetched for one stats request
const FETCH_WINDOW: u32 = 100;

/// Number of entries kept in the languages map and recent-activity list
const TOP_LANGUAGES: usize = 10;
const RECENT_EVENTS: usize = 10;

/// Compute contribution statistics for `username`.
///
/// The four fetches run concurrently and are joined on completion. If any one
/// fails the whole operation fails with that error; the remaining fetches run
/// to completion and their results are discarded. No partial results are
/// produced.
pub async fn contribution_stats(
    github: &GitHubClient,
    username: &str,
) -> Result<ContributionStats, GitHubError> {
    let (events, pull_requests, issues, repos) = tokio::join!(
        github.get_user_events(username, 1, FETCH_WINDOW),
        github.get_user_pull_requests(username),
        github.get_user_issues(username),
        github.get_user_repositories(username, 1, FETCH_WINDOW),
    );

    let events = events?;
    let pull_requests = pull_requests?;
    let issues = issues?;
    let repos = repos?;

    let owned = repos.iter().filter(|r| !r.fork).count();

    Ok(ContributionStats {
        total_events: events.len(),
        total_pull_requests: pull_requests.len(),
        total_issues: issues.len(),
        total_repositories: repos.len(),
        owned_repositories: owned,
        forked_repositories: repos.len() - owned,
        contribution_breakdown: contribution_breakdown(&events),
        languages: language_histogram(&repos),
        recent_activity: recent_activity(&events),
    })
}

/// Count events per recognized type tag, with a catch-all bucket for anything
/// unrecognized
pub fn contribution_breakdown(events: &[Event]) -> ContributionBreakdown {
    let mut breakdown = ContributionBreakdown::default();

    for event in events {
        match event.kind.as_str() {
            "PushEvent" => breakdown.push_events += 1,
            "PullRequestEvent" => breakdown.pull_request_events += 1,
            "IssuesEvent" => breakdown.issue_events += 1,
            "CreateEvent" => breakdown.create_events += 1,
            "ForkEvent" => breakdown.fork_events += 1,
            "WatchEvent" => breakdown.watch_events += 1,
            _ => breakdown.other += 1,
        }
    }

    breakdown
}

/// Count repositories per non-null language, keeping the top 10 by descending
/// count. Ties keep first-encounter order (stable sort).
pub fn language_histogram(repos: &[Repository]) -> Map<String, Value> {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for repo in repos {
        if let Some(language) = &repo.language {
            match counts.iter_mut().find(|(name, _)| name == language) {
                Some((_, count)) => *count += 1,
                None => counts.push((language.clone(), 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(name, count)| (name, Value::from(count)))
        .collect()
}

/// Project the first 10 events (upstream newest-first order) for display
pub fn recent_activity(events: &[Event]) -> Vec<RecentActivity> {
    events
        .iter()
        .take(RECENT_EVENTS)
        .map(|e| RecentActivity {
            kind: e.kind.clone(),
            repo: e.repo.name.clone(),
            created_at: e.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventRepo;
    use chrono::{Duration, Utc};

    fn event(kind: &str, repo: &str) -> Event {
        Event {
            kind: kind.to_string(),
            repo: EventRepo {
                name: repo.to_string(),
            },
            created_at: Utc::now(),
        }
    }

    fn repo(name: &str, language: Option<&str>, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octo/{name}"),
            html_url: format!("https://github.com/octo/{name}"),
            description: None,
            language: language.map(String::from),
            fork,
            stargazers_count: 0,
            updated_at: None,
        }
    }

    #[test]
    fn test_breakdown_counts_recognized_and_other() {
        let events = vec![
            event("PushEvent", "octo/a"),
            event("PushEvent", "octo/a"),
            event("PushEvent", "octo/b"),
            event("PullRequestEvent", "octo/a"),
            event("UnknownEvent", "octo/c"),
        ];

        let breakdown = contribution_breakdown(&events);

        assert_eq!(
            breakdown,
            ContributionBreakdown {
                push_events: 3,
                pull_request_events: 1,
                issue_events: 0,
                create_events: 0,
                fork_events: 0,
                watch_events: 0,
                other: 1,
            }
        );
        assert_eq!(breakdown.total() as usize, events.len());
    }

    #[test]
    fn test_breakdown_covers_all_recognized_tags() {
        let events = vec![
            event("IssuesEvent", "octo/a"),
            event("CreateEvent", "octo/a"),
            event("ForkEvent", "octo/a"),
            event("WatchEvent", "octo/a"),
        ];

        let breakdown = contribution_breakdown(&events);

        assert_eq!(breakdown.issue_events, 1);
        assert_eq!(breakdown.create_events, 1);
        assert_eq!(breakdown.fork_events, 1);
        assert_eq!(breakdown.watch_events, 1);
        assert_eq!(breakdown.other, 0);
    }

    #[test]
    fn test_language_histogram_sorted_descending() {
        let repos = vec![
            repo("a", Some("Rust"), false),
            repo("b", Some("Go"), false),
            repo("c", Some("Rust"), false),
            repo("d", None, false),
            repo("e", Some("Rust"), true),
        ];

        let languages = language_histogram(&repos);

        let entries: Vec<(&String, u64)> = languages
            .iter()
            .map(|(k, v)| (k, v.as_u64().unwrap()))
            .collect();
        assert_eq!(entries[0], (&"Rust".to_string(), 3));
        assert_eq!(entries[1], (&"Go".to_string(), 1));
        assert_eq!(languages.len(), 2);
    }

    #[test]
    fn test_language_histogram_truncates_to_ten() {
        let mut repos = Vec::new();
        for i in 0..12 {
            // Lang0 appears 13 times, every other language once.
            repos.push(repo(&format!("r{i}"), Some(&format!("Lang{i}")), false));
            repos.push(repo(&format!("s{i}"), Some("Lang0"), false));
        }

        let languages = language_histogram(&repos);

        assert_eq!(languages.len(), 10);
        let first = languages.iter().next().unwrap();
        assert_eq!(first.0, "Lang0");
        assert_eq!(first.1.as_u64().unwrap(), 13);
    }

    #[test]
    fn test_language_histogram_ties_keep_encounter_order() {
        let repos = vec![
            repo("a", Some("Zig"), false),
            repo("b", Some("Ada"), false),
        ];

        let languages = language_histogram(&repos);

        let keys: Vec<&String> = languages.keys().collect();
        assert_eq!(keys, vec!["Zig", "Ada"]);
    }

    #[test]
    fn test_recent_activity_caps_at_ten_in_order() {
        let base = Utc::now();
        let events: Vec<Event> = (0..15)
            .map(|i| Event {
                kind: "PushEvent".to_string(),
                repo: EventRepo {
                    name: format!("octo/r{i}"),
                },
                created_at: base - Duration::minutes(i),
            })
            .collect();

        let recent = recent_activity(&events);

        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].repo, "octo/r0");
        assert_eq!(recent[9].repo, "octo/r9");
        assert_eq!(recent[0].kind, "PushEvent");
    }
}
