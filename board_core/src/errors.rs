//! # Error Types
//!
//! Structured error types for board_core.
//!
//! The calculators never return these: grammage, tonnage, price and MOQ are
//! total functions that degrade to zero or "unreachable" instead. Errors only
//! come from the edges around them, such as parsing a flute code typed by a
//! user, loading the article catalog, or reading a settings file.
//!
//! ## Example
//!
//! ```rust
//! use board_core::errors::{CalcError, CalcResult};
//!
//! fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
//!     if value <= 0.0 {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_positive("length_mm", -1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for board_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the fallible edges of the library.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Flute code is not one of A, B, C, E, F, BC, BE, AB
    #[error("Unknown flute code: '{code}'")]
    UnknownFlute { code: String },

    /// No article with this id in the catalog
    #[error("Article not found: {id}")]
    ArticleNotFound { id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownFlute error
    pub fn unknown_flute(code: impl Into<String>) -> Self {
        CalcError::UnknownFlute { code: code.into() }
    }

    /// Create an ArticleNotFound error
    pub fn article_not_found(id: impl Into<String>) -> Self {
        CalcError::ArticleNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownFlute { .. } => "UNKNOWN_FLUTE",
            CalcError::ArticleNotFound { .. } => "ARTICLE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for CalcError {
    fn from(err: toml::ser::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length_mm", "-5", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_flute("Z").error_code(), "UNKNOWN_FLUTE");
        assert_eq!(CalcError::article_not_found("ART-9").error_code(), "ARTICLE_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_flute("X");
        assert_eq!(error.to_string(), "Unknown flute code: 'X'");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error: CalcError = err.into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
