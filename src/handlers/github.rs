//! GitHub lookup handlers
//!
//! HTTP handlers for profile, repository, event and search lookups plus the
//! aggregated statistics endpoint. Thin mapping only: parameter extraction,
//! delegation, status-code mapping.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::stats::contribution_stats;
use crate::AppState;

/// Pagination query parameters forwarded to the upstream API
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
    #[serde(rename = "perPage")]
    per_page: Option<u32>,
}

impl PageQuery {
    fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(30)
    }
}

/// GET /api/github/user/{username}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let user = state.github.get_user(&username).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/github/user/{username}/repos?page&perPage
pub async fn get_user_repos(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let repos = state
        .github
        .get_user_repositories(&username, query.page(), query.per_page())
        .await?;
    Ok(HttpResponse::Ok().json(repos))
}

/// GET /api/github/user/{username}/events?page&perPage
pub async fn get_user_events(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let events = state
        .github
        .get_user_events(&username, query.page(), query.per_page())
        .await?;
    Ok(HttpResponse::Ok().json(events))
}

/// GET /api/github/user/{username}/pullrequests
pub async fn get_user_pull_requests(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let pull_requests = state.github.get_user_pull_requests(&username).await?;
    Ok(HttpResponse::Ok().json(pull_requests))
}

/// GET /api/github/user/{username}/issues
pub async fn get_user_issues(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let issues = state.github.get_user_issues(&username).await?;
    Ok(HttpResponse::Ok().json(issues))
}

/// GET /api/github/user/{username}/stats
pub async fn get_user_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let stats = contribution_stats(&state.github, &username).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Configure GitHub lookup routes
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/github")
            .route("/user/{username}", web::get().to(get_user))
            .route("/user/{username}/repos", web::get().to(get_user_repos))
            .route("/user/{username}/events", web::get().to(get_user_events))
            .route(
                "/user/{username}/pullrequests",
                web::get().to(get_user_pull_requests),
            )
            .route("/user/{username}/issues", web::get().to(get_user_issues))
            .route("/user/{username}/stats", web::get().to(get_user_stats)),
    );
}
