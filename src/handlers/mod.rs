pub mod contributions;
pub mod github;


pub use contributions::configure_contribution_routes;
pub use github::configure_github_routes;
