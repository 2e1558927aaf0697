//! Error types for Library Manager

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::book::BookDraft, validation::FieldError};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A rejected write, carrying the submitted values for re-display
    #[error("Validation failed on {} field(s)", .errors.len())]
    Validation {
        draft: Box<BookDraft>,
        errors: Vec<FieldError>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Marker attached to error responses.
///
/// The response body is left empty; the page is rendered by
/// [`crate::api::failure::respond`], the last stage of the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub status: Option<StatusCode>,
    /// Message safe to show to any visitor
    pub message: Option<String>,
    /// Underlying cause, shown only in development
    pub detail: String,
}

impl Failure {
    /// Failure for an error response produced outside the handlers, such as
    /// an extractor rejection or a method mismatch.
    ///
    /// A path served under another method is reported as not found, the
    /// same as a path with no route at all.
    pub fn from_status(status: StatusCode, detail: String) -> Self {
        let status = if status == StatusCode::METHOD_NOT_ALLOWED {
            StatusCode::NOT_FOUND
        } else {
            status
        };
        Self {
            status: Some(status),
            message: status.canonical_reason().map(str::to_string),
            detail,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_failure(&self) -> Failure {
        let message = match self {
            AppError::NotFound(_) => Some("Page Not Found".to_string()),
            AppError::Validation { .. } => Some(self.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                Some("Database error".to_string())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                None
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                None
            }
        };

        Failure {
            status: Some(self.status()),
            message,
            detail: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let failure = self.to_failure();
        let mut response = self.status().into_response();
        response.extensions_mut().insert(failure);
        response
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
