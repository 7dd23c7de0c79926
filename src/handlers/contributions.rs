//! Tracked contribution handlers
//!
//! HTTP handlers for the contribution tracking CRUD surface and the per-user
//! summary endpoint.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{CreateContributionRequest, UpdateContributionRequest};
use crate::services::contributions::ContributionError;
use crate::AppState;

/// GET /api/contributions
pub async fn list_contributions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let contributions = state.store.list().await;
    Ok(HttpResponse::Ok().json(contributions))
}

/// GET /api/contributions/{id}
pub async fn get_contribution(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let contribution = state.store.get(id).await.map_err(map_contribution_error)?;
    Ok(HttpResponse::Ok().json(contribution))
}

/// POST /api/contributions
pub async fn create_contribution(
    state: web::Data<AppState>,
    body: web::Json<CreateContributionRequest>,
) -> Result<HttpResponse, AppError> {
    let contribution = state
        .store
        .create(body.into_inner())
        .await
        .map_err(map_contribution_error)?;
    Ok(HttpResponse::Created().json(contribution))
}

/// PUT /api/contributions/{id}
pub async fn update_contribution(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateContributionRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let contribution = state
        .store
        .update(id, body.into_inner())
        .await
        .map_err(map_contribution_error)?;
    Ok(HttpResponse::Ok().json(contribution))
}

/// DELETE /api/contributions/{id}
pub async fn delete_contribution(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    state
        .store
        .delete(id)
        .await
        .map_err(map_contribution_error)?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/contributions/stats/{username}
pub async fn get_user_contribution_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let stats = state.store.stats_for_user(&username).await;
    Ok(HttpResponse::Ok().json(stats))
}

/// A non-numeric id can never name a stored record, so it maps to the same
/// not-found response as an unknown numeric id.
fn parse_id(path: &str) -> Result<u64, AppError> {
    path.parse()
        .map_err(|_| map_contribution_error(ContributionError::NotFound))
}

/// Map contribution store errors to application errors
fn map_contribution_error(e: ContributionError) -> AppError {
    match e {
        ContributionError::MissingFields => AppError::Validation(e.to_string()),
        ContributionError::NotFound => AppError::NotFound(e.to_string()),
    }
}

/// Configure contribution routes
pub fn configure_contribution_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contributions")
            // The static stats path must be registered before the {id} matcher.
            .route(
                "/stats/{username}",
                web::get().to(get_user_contribution_stats),
            )
            .route("", web::get().to(list_contributions))
            .route("", web::post().to(create_contribution))
            .route("/{id}", web::get().to(get_contribution))
            .route("/{id}", web::put().to(update_contribution))
            .route("/{id}", web::delete().to(delete_contribution)),
    );
}
