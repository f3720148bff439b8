// ABOUTME: Unified error type and error codes shared by every FitAI component
// ABOUTME: Maps configuration, profile validation, and completion-service failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAI Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation returns [`AppResult`]. Errors carry a stable
//! [`ErrorCode`], a human-readable message, and an optional source error so
//! provider failures keep their cause when they are surfaced as
//! `ExternalServiceUnavailable`.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input (malformed model output, bad CLI values)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A user profile violates its field constraints
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile = 3004,

    // External Services (5000-5999)
    /// The completion service returned an error response
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The completion service could not be used to answer the request
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The completion service rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// The completion service quota or rate limit was hit
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// Required configuration value is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidProfile => "The user profile is invalid",
            Self::ExternalServiceError => "The completion service encountered an error",
            Self::ExternalServiceUnavailable => "The completion service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the completion service failed",
            Self::ExternalRateLimited => "Completion service rate limit exceeded",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this code originates from the completion service boundary
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
        )
    }

    /// Whether this code is a configuration failure (fatal at startup)
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigMissing | Self::ConfigInvalid)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// User profile violates a field constraint
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidProfile, message)
    }

    /// Required configuration is missing
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Configuration is present but invalid
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Completion service unavailable, wrapping the provider failure as the source
    #[must_use]
    pub fn service_unavailable(cause: Self) -> Self {
        let message = cause.message.clone();
        Self::new(ErrorCode::ExternalServiceUnavailable, message).with_source(cause)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The error code of the innermost `AppError` in the source chain
    #[must_use]
    pub fn root_code(&self) -> ErrorCode {
        let mut code = self.code;
        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            if let Some(app) = err.downcast_ref::<Self>() {
                code = app.code;
            }
            current = err.source();
        }
        code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_profile("Weight must be positive");
        assert_eq!(
            error.to_string(),
            "The user profile is invalid: Weight must be positive"
        );
    }

    #[test]
    fn test_service_unavailable_keeps_cause() {
        let cause = AppError::new(ErrorCode::ExternalRateLimited, "quota exceeded");
        let error = AppError::service_unavailable(cause);

        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
        assert_eq!(error.message, "quota exceeded");
        assert_eq!(error.root_code(), ErrorCode::ExternalRateLimited);
    }

    #[test]
    fn test_code_classification() {
        assert!(ErrorCode::ExternalAuthFailed.is_external());
        assert!(!ErrorCode::InvalidProfile.is_external());
        assert!(ErrorCode::ConfigMissing.is_configuration());
        assert!(!ErrorCode::InternalError.is_configuration());
    }
}
