// ABOUTME: Unified error handling with standard error codes and structured context
// ABOUTME: Defines AppError, ErrorCode, and the error response shape used by request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dietlog Contributors

//! # Unified Error Handling System
//!
//! Centralized error types for dietlog. Calculation engines fail with the
//! typed [`CalculationError`] union; request handlers convert those into
//! [`AppError`], which carries a stable [`ErrorCode`] and an HTTP status
//! for the surrounding application to map onto user-facing messages.

/// Typed failures raised by the calculation engines
pub mod calculation;

pub use calculation::CalculationError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Syntactically valid but semantically degenerate input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent from both the request and the stored profile
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Value could not be parsed (non-numeric weight, malformed date)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Target date is not after the start date
    #[serde(rename = "INVALID_DATE_RANGE")]
    InvalidDateRange = 3004,
    /// Plan step interval is not a positive number of days
    #[serde(rename = "INVALID_INTERVAL")]
    InvalidInterval = 3005,

    // Resource Management (4000-4999)
    /// Requested resource (tool, record) does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Result could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::InvalidInterval => 400,

            // 422 Unprocessable Entity
            Self::InvalidDateRange => 422,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 500 Internal Server Error
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::InvalidDateRange => "The target date must be after the start date",
            Self::InvalidInterval => "The plan interval must be at least one day",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Where and on which input an error happened
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Tool dispatch the error belongs to
    pub request_id: Option<String>,
    /// Offending field, when the failure is tied to one input
    pub field: Option<String>,
    /// Structured values behind the failure (dates, intervals); null when absent
    pub details: serde_json::Value,
}

/// Error returned by tool dispatch and request handlers
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Name the input field the error refers to
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Attach structured details, merging object keys into any already present
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        match (&mut self.context.details, details) {
            (serde_json::Value::Object(existing), serde_json::Value::Object(extra)) => {
                existing.extend(extra);
            }
            (slot, details) => *slot = details,
        }
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status a request handler should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error response body returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID for correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Offending input field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Extra structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.context.request_id,
                field: error.context.field,
                details: error.context.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value could not be parsed
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(ErrorCode::InvalidFormat, message).with_field(field)
    }

    /// Required field missing
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
        .with_field(field)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration failed validation
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("Failed to serialize result: {error}"),
        )
        .with_source(error)
    }
}
