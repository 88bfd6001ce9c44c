//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  JsonRejection ──────────────► MALFORMED_REQUEST_BODY  (400)           │
//! │                                                                         │
//! │  CoreError::Validation ──────┐                                          │
//! │  CoreError::BatchRejected ───┼► VALIDATION_ERROR        (400)           │
//! │  CoreError::QuantityOverflow ┘                                          │
//! │                                                                         │
//! │  CoreError::ItemNotFound ────► NOT_FOUND                (404)           │
//! │                                                                         │
//! │  CoreError::InternalInconsistency ► INTERNAL            (500)           │
//! │     (logged in full, client sees a generic message)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Item not found: tomatoe"
//! }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use stockroom_core::CoreError;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by every failing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item not found (404)
    NotFound,

    /// Item fields failed validation (400)
    ValidationError,

    /// Body is not JSON of the expected shape (400)
    MalformedRequestBody,

    /// Store invariant violated (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::MalformedRequestBody => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::BatchRejected { .. } | CoreError::QuantityOverflow { .. } => {
                ApiError::validation(err.to_string())
            }
            CoreError::InternalInconsistency(detail) => {
                tracing::error!(%detail, "Inventory invariant violated");
                ApiError::internal("Inventory update failed")
            }
        }
    }
}

/// Converts body extraction failures to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::MalformedRequestBody, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let not_found: ApiError = CoreError::ItemNotFound("tomatoe".into()).into();
        assert_eq!(not_found.code, ErrorCode::NotFound);
        assert_eq!(not_found.message, "Item not found: tomatoe");

        let invalid: ApiError = CoreError::from(ValidationError::MissingField { field: "name" }).into();
        assert_eq!(invalid.code, ErrorCode::ValidationError);
        assert_eq!(invalid.message, "name is required");

        let batch: ApiError = CoreError::BatchRejected {
            index: 0,
            source: ValidationError::MissingField { field: "code" },
        }
        .into();
        assert_eq!(batch.code.status(), StatusCode::BAD_REQUEST);

        let internal: ApiError = CoreError::InternalInconsistency("index gone".into()).into();
        assert_eq!(internal.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!internal.message.contains("index gone"));
    }

    #[test]
    fn test_error_code_wire_names() {
        let json = serde_json::to_string(&ErrorCode::MalformedRequestBody).unwrap();
        assert_eq!(json, "\"MALFORMED_REQUEST_BODY\"");
    }
}
