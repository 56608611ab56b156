//! # Unified Error Handling
//!
//! Centralized error type for the analysis engine. The core raises exactly
//! one family of errors: invalid input, always detected before any formula
//! executes and always naming the violated constraint and offending field.
//! There are no retry semantics and no partial results.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes raised by the analysis engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input is malformed or logically inconsistent
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A required field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// A value falls outside its plausible physiological range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// A cross-field ordering constraint is violated (e.g. systolic <= diastolic)
    #[serde(rename = "ORDERING_VIOLATION")]
    OrderingViolation,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::OrderingViolation => "A cross-field ordering constraint was violated",
        }
    }
}

/// Unified error type for the analysis engine
#[derive(Debug, Clone, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Offending input field, when the error is attributable to one
    pub field: Option<&'static str>,
    /// Human-readable error message naming the violated constraint
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
        }
    }

    /// Attach the offending field name
    #[must_use]
    pub const fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required field is missing
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Required field '{field}' is missing"),
        )
        .with_field(field)
    }

    /// A value falls outside its acceptable range
    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_field(field)
    }

    /// A cross-field ordering constraint is violated
    pub fn ordering(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OrderingViolation, message).with_field(field)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(
                f,
                "{}: {} (field: {field})",
                self.code.description(),
                self.message
            ),
            None => write!(f, "{}: {}", self.code.description(), self.message),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
