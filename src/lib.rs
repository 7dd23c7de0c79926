//! Open Source Contribution Tracker
//!
//! Looks up a GitHub profile, derives contribution statistics from the user's
//! public activity, and keeps an in-process log of contributions the operator
//! is tracking against arbitrary repositories.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use models::{
    ContributionBreakdown, ContributionStats, CreateContributionRequest, Event, GitHubUser,
    RecentActivity, Repository, TrackedContribution, UpdateContributionRequest,
    UserContributionStats,
};
pub use services::{ContributionError, ContributionStore, GitHubClient, GitHubError};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
    pub store: ContributionStore,
}
