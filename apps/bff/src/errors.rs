use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend::BackendError;

/// Application-level error type.
/// Surfaces as a JSON body on plain HTTP routes and as a GraphQL error
/// (with `code` / `status` extensions) inside resolvers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Backend(_) => "BACKEND_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Backend(BackendError::Api { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// The message callers see. Backend messages pass through unmodified.
    fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Backend(BackendError::Api { message, .. }) => message.clone(),
            AppError::Backend(e) => e.to_string(),
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.message()).extend_with(|_, ext| {
            ext.set("code", self.code());
            if let AppError::Backend(BackendError::Api { status, .. }) = self {
                ext.set("status", *status);
            }
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Backend(e) = &self {
            tracing::error!("Backend error: {e}");
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.message()
            }
        }));

        (self.status(), body).into_response()
    }
}
