//! API error types with HTTP status code mapping

use std::fmt;

use log::error;
use serde::Serialize;

use crate::core::error::AttendanceError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Requester does not own the resource (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Upload exceeds the size limit (413)
    PayloadTooLarge,
    /// Upload type not on the allow-list (415)
    UnsupportedMediaType,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::PayloadTooLarge => 413,
            Self::UnsupportedMediaType => 415,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create an error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a forbidden error
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        match &err {
            AttendanceError::AccuracyTooLow { .. } | AttendanceError::InvalidReading(_) => {
                Self::bad_request(err.to_string())
            },
            AttendanceError::UnsupportedMediaType { .. } => {
                Self::new(ErrorCode::UnsupportedMediaType, err.to_string())
            },
            AttendanceError::PayloadTooLarge { .. } => {
                Self::new(ErrorCode::PayloadTooLarge, err.to_string())
            },
            AttendanceError::NotFound(_) => Self::not_found("Attendance not found"),
            AttendanceError::StorageFailure(cause) => {
                error!("Photo storage failed: {cause}");
                Self::internal(err.to_string())
            },
            AttendanceError::PersistenceFailure(cause) => {
                error!("Attendance persistence failed: {cause:#}");
                Self::internal(err.to_string())
            },
        }
    }
}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
