//! # Error Types
//!
//! Structured error types for beam_core. These errors carry enough
//! context to be handled programmatically rather than matched on strings.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CheckError, CheckResult};
//!
//! fn validate_span(span_ft: f64) -> CheckResult<()> {
//!     if span_ft <= 0.0 {
//!         return Err(CheckError::InvalidInput {
//!             field: "span_ft".to_string(),
//!             value: span_ft.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Structured error type for beam check operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CheckError {
    /// Section identifier has no entry in the capacity table
    #[error("Unknown section: '{section}' is not in the capacity table")]
    UnknownSection { section: String },

    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    /// Create an UnknownSection error
    pub fn unknown_section(section: impl Into<String>) -> Self {
        CheckError::UnknownSection {
            section: section.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::UnknownSection { .. } => "UNKNOWN_SECTION",
            CheckError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CheckError::invalid_input("span_ft", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CheckError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CheckError::unknown_section("omega").error_code(),
            "UNKNOWN_SECTION"
        );
        assert_eq!(
            CheckError::invalid_input("span_ft", "0", "Span must be positive").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_unknown_section_message() {
        let error = CheckError::unknown_section("omega");
        assert_eq!(
            error.to_string(),
            "Unknown section: 'omega' is not in the capacity table"
        );
    }
}
