//! HTTP API errors
//!
//! Every handler failure is one of these variants; the `IntoResponse` impl
//! renders it as a status code plus a `{"detail": ...}` JSON body. Store
//! transport failures become 500 and are logged, never reported as 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::NameError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Name failed validation (422)
    #[error("{0}")]
    InvalidName(#[from] NameError),

    /// Referenced list does not exist (404)
    #[error("List not found")]
    ListNotFound,

    /// Referenced item does not exist (404)
    #[error("Item not found")]
    ItemNotFound,

    /// List name already taken (409)
    #[error("List already exists")]
    ListExists,

    /// Item name already taken within the list (409)
    #[error("Item already exists in this list")]
    ItemExists,

    /// Store transport failure (500)
    #[error("Internal server error")]
    Internal(#[source] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ListNotFound => StatusCode::NOT_FOUND,
            ApiError::ItemNotFound => StatusCode::NOT_FOUND,
            ApiError::ListExists => StatusCode::CONFLICT,
            ApiError::ItemExists => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ListNotFound => ApiError::ListNotFound,
            StoreError::ItemNotFound => ApiError::ItemNotFound,
            StoreError::DuplicateList => ApiError::ListExists,
            StoreError::DuplicateItem => ApiError::ItemExists,
            other => ApiError::Internal(other),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref source) = self {
            tracing::error!("request failed: {}", source);
        }
        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
