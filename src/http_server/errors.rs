//! # HTTP API Errors
//!
//! Error types for the transport adapter, with their status-code mapping
//! and the failure envelope they serialize to.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Requested id has no live record
    #[error("User not found")]
    NotFound,

    /// One or more field constraints violated
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Email already used by a different live record
    #[error("Email already exists")]
    Conflict,

    /// Request body could not be parsed at all (adapter-level, before the
    /// store is ever called)
    #[error("Invalid JSON format")]
    InvalidJson,

    /// Unknown resource route
    #[error("Route not found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected fault; the detail is logged, never exposed
    #[error("Something went wrong!")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(errors) => ApiError::Validation(errors),
            StoreError::Conflict => ApiError::Conflict,
            StoreError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

/// Failure envelope body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let errors = match err {
            ApiError::Validation(errors) => Some(errors.clone()),
            _ => None,
        };
        Self {
            success: false,
            message: err.to_string(),
            errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "internal error");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(StoreError::Conflict),
            ApiError::Conflict
        ));
        let mapped = ApiError::from(StoreError::Validation(vec!["Name is required".to_string()]));
        match mapped {
            ApiError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_envelope_carries_all_messages() {
        let err = ApiError::Validation(vec![
            "Name is required".to_string(),
            "Valid email is required".to_string(),
        ]);
        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.errors.unwrap().len(), 2);
    }

    #[test]
    fn test_internal_envelope_hides_detail() {
        let err = ApiError::Internal("lock poisoned".to_string());
        let body = ErrorResponse::from(&err);
        assert_eq!(body.message, "Something went wrong!");
        assert!(body.errors.is_none());
    }
}
