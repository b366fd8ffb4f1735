// ABOUTME: Unified error types shared by every mealplanner component
// ABOUTME: Defines ErrorCode, ErrorKind, AppError, and the serializable ErrorResponse envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplanner Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Callers
//! that need to branch on the failure class use [`AppError::kind`]:
//!
//! - [`ErrorKind::NotFound`]: unknown category or tag, no substring match
//! - [`ErrorKind::Validation`]: undefined parent, duplicate tag, cycle, bad mode
//! - [`ErrorKind::Construction`]: a person whose restriction cannot be resolved
//!
//! The free-text parser never produces an error.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Requested category or tag is not registered
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Key is already registered and overwrite was not requested
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,
    /// Caller supplied an invalid value (undefined parent, cycle, negative calories)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Requested output mode is not supported
    #[serde(rename = "UNSUPPORTED_FORMAT")]
    UnsupportedFormat,
    /// A value object could not be constructed from the supplied parts
    #[serde(rename = "CONSTRUCTION_FAILED")]
    ConstructionFailed,
    /// Writing or reading tabular data failed
    #[serde(rename = "EXPORT_FAILED")]
    ExportFailed,
    /// Configuration value is missing or out of range
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
}

/// Coarse failure classes callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Lookup of a registry key failed
    NotFound,
    /// Input was rejected before any state changed
    Validation,
    /// A person or other composite could not be built
    Construction,
    /// File or stream I/O failed
    Io,
    /// Configuration could not be loaded
    Config,
}

impl ErrorCode {
    /// Human-readable description of the code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "Resource not found",
            Self::ResourceAlreadyExists => "Resource already exists",
            Self::InvalidInput => "Invalid input",
            Self::UnsupportedFormat => "Unsupported format",
            Self::ConstructionFailed => "Construction failed",
            Self::ExportFailed => "Export failed",
            Self::ConfigInvalid => "Invalid configuration",
        }
    }

    /// Failure class this code belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ResourceNotFound => ErrorKind::NotFound,
            Self::ResourceAlreadyExists | Self::InvalidInput | Self::UnsupportedFormat => {
                ErrorKind::Validation
            }
            Self::ConstructionFailed => ErrorKind::Construction,
            Self::ExportFailed => ErrorKind::Io,
            Self::ConfigInvalid => ErrorKind::Config,
        }
    }
}

/// Application error carrying a code, a message, and optional structured details
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context (resource names, offending values)
    pub details: serde_json::Value,
    /// Underlying cause, if any
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach an underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Failure class of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// A named resource is absent from its registry
    pub fn not_found(resource: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{resource} '{name}' not found"),
        )
        .with_details(serde_json::json!({ "resource": resource, "name": name }))
    }

    /// A key is already registered
    pub fn already_exists(resource: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{resource} '{name}' already registered"),
        )
        .with_details(serde_json::json!({ "resource": resource, "name": name }))
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unsupported output mode
    pub fn unsupported_format(mode: impl Into<String>) -> Self {
        let mode = mode.into();
        Self::new(
            ErrorCode::UnsupportedFormat,
            format!("Unsupported mode: {mode}"),
        )
        .with_details(serde_json::json!({ "mode": mode }))
    }

    /// Composite value could not be built
    pub fn construction(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstructionFailed, message)
    }

    /// Export or import of tabular data failed
    pub fn export(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportFailed, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::export(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "csv-errors")]
impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        Self::export(error.to_string()).with_source(error)
    }
}

/// Serializable error envelope for consumers that report failures as JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_kinds() {
        assert_eq!(ErrorCode::ResourceNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::ResourceAlreadyExists.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::UnsupportedFormat.kind(), ErrorKind::Validation);
        assert_eq!(ErrorCode::ConstructionFailed.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_not_found_message_and_details() {
        let error = AppError::not_found("Category", "LAMB");
        assert_eq!(error.to_string(), "Resource not found: Category 'LAMB' not found");
        assert_eq!(error.details["name"], "LAMB");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::unsupported_format("html"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNSUPPORTED_FORMAT"));
        assert!(json.contains("html"));
    }
}
