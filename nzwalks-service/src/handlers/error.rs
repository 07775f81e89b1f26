//! API error types for handler operations
//!
//! [`ApiError`] is the failure side of every resource handler operation and
//! converts into an HTTP response:
//!
//! - `ValidationFailed`: 400 whose body is the bare field-error map
//! - `NotFound`: 404 with an empty body
//! - `BadRequest`: 400 (unparseable body)
//! - `InternalError` / `ServiceUnavailable`: 500 / 503 from repository failures
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::handlers::{ApiError, ApiErrorKind, ApiOperation};
//!
//! let error = ApiError::not_found("Region", "8a1c").with_operation(ApiOperation::Delete);
//! assert_eq!(error.kind, ApiErrorKind::NotFound);
//! assert_eq!(error.entity_id.as_deref(), Some("8a1c"));
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, RepositoryOperation};
use crate::validation::FieldErrors;

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing a collection
    List,
    /// Getting a single entity by id
    Get,
    /// Adding a new entity
    Add,
    /// Replacing an existing entity
    Update,
    /// Deleting an entity
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Add => write!(f, "add"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<RepositoryOperation> for ApiOperation {
    fn from(op: RepositoryOperation) -> Self {
        match op {
            RepositoryOperation::List => Self::List,
            RepositoryOperation::Get => Self::Get,
            RepositoryOperation::Add => Self::Add,
            RepositoryOperation::Update => Self::Update,
            RepositoryOperation::Delete => Self::Delete,
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Entity was not found
    NotFound,
    /// One or more field rules were violated
    ValidationFailed,
    /// Request body could not be read
    BadRequest,
    /// Internal server error
    InternalError,
    /// Store temporarily unreachable
    ServiceUnavailable,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ValidationFailed | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Region", "Walk")
    pub entity_type: Option<String>,
    /// The id of the entity involved
    pub entity_id: Option<String>,
    /// Per-field messages, only populated for `ValidationFailed`
    pub field_errors: FieldErrors,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
            field_errors: FieldErrors::new(),
        }
    }

    /// Create a "not found" error with entity context
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self::new(ApiOperation::Get, ApiErrorKind::NotFound, "Entity not found")
            .with_entity(entity_type, entity_id)
    }

    /// Create a validation failure carrying the field-error map
    pub fn validation_failed(operation: ApiOperation, field_errors: FieldErrors) -> Self {
        Self {
            field_errors,
            ..Self::new(operation, ApiErrorKind::ValidationFailed, "Validation failed")
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::Add, ApiErrorKind::BadRequest, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: ApiOperation) -> Self {
        self.operation = operation;
        self
    }

    fn is_server_error(&self) -> bool {
        self.kind.status_code().is_server_error()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors other than `NotFound` and `ValidationFailed`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        if self.is_server_error() {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                entity_type = ?self.entity_type,
                entity_id = ?self.entity_id,
                "API error: {}", self.message
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                kind = %self.kind,
                entity_id = ?self.entity_id,
                "API error: {}", self.message
            );
        }

        match self.kind {
            // Not-found is signalled by status alone.
            ApiErrorKind::NotFound => status.into_response(),
            ApiErrorKind::ValidationFailed => (status, Json(self.field_errors)).into_response(),
            _ => {
                let response = ApiErrorResponse {
                    error: self.message,
                    code: self.kind.error_code(),
                    status: status.as_u16(),
                    operation: Some(self.operation.to_string()),
                };
                (status, Json(response)).into_response()
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        // Store internals stay out of the client-facing message; the full
        // error is logged here.
        let (kind, message) = if err.is_retriable() {
            (ApiErrorKind::ServiceUnavailable, "Service temporarily unavailable")
        } else {
            (ApiErrorKind::InternalError, "An internal error occurred")
        };
        tracing::error!(error = %err, "Repository failure");

        Self {
            operation: err.operation.into(),
            kind,
            message: message.to_string(),
            entity_type: err.entity_type,
            entity_id: err.entity_id,
            field_errors: FieldErrors::new(),
        }
    }
}
