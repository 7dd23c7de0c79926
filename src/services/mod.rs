pub mod contributions;
pub mod github;
pub mod stats;

pub use contributions::{ContributionError, ContributionStore};
pub use github::{GitHubClient, GitHubError};
pub use stats::contribution_stats;
