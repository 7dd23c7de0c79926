pub mod contribution;
pub mod github;

pub use contribution::{
    CreateContributionRequest, TrackedContribution, UpdateContributionRequest,
    UserContributionStats,
};
pub use github::{
    ContributionBreakdown, ContributionStats, Event, EventRepo, GitHubUser, RecentActivity,
    RepoCommit, Repository, SearchItem, SearchResponse,
};
