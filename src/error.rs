use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::services::GitHubError;

/// Application-level error type
///
/// Every variant carries the exact message that is returned to the client as
/// the `{"error": ...}` body; upstream failures are surfaced verbatim without
/// classifying the underlying cause.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid request input
    Validation(String),
    /// Unknown identifier
    NotFound(String),
    /// The external GitHub API call failed (network, non-2xx, malformed body)
    Upstream(String),
    /// Internal server error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Upstream(msg)
            | Self::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        match self {
            Self::Validation(_) => HttpResponse::BadRequest().json(body),
            Self::NotFound(_) => HttpResponse::NotFound().json(body),
            Self::Upstream(_) | Self::Internal(_) => {
                tracing::error!("request failed: {self}");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<GitHubError> for AppError {
    fn from(err: GitHubError) -> Self {
        Self::Upstream(err.to_string())
    }
}
