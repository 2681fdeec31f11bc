//! # Error Types
//!
//! Structured error types for clt_core. Every error here is a configuration
//! failure detected while a layer stack is being built: once a
//! [`LayerStack`](crate::calculations::LayerStack) exists, none of its queries
//! can fail.
//!
//! ## Example
//!
//! ```rust
//! use clt_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "thicknesses[0]",
//!             thickness_mm.to_string(),
//!             "Lamella thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-40.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for clt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section construction.
///
/// Each variant names the offending input so callers (spreadsheet formulas,
/// code-check layers) can present the problem without parsing strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive thickness, unknown orientation, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Parallel input lists do not describe the same number of layers
    #[error("Length mismatch for '{field}': expected {expected} entries, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// The layup has no layers at all
    #[error("Layup contains no layers")]
    EmptyLayup,

    /// No layer carries load in the analysed direction, so the centre of
    /// gravity and the active area are undefined
    #[error("No active (0°) layer in the {direction} direction - centre of gravity is undefined")]
    NoActiveLayers { direction: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (raised by front ends; the core never touches files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
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

    /// Create a LengthMismatch error
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        CalcError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create a NoActiveLayers error
    pub fn no_active_layers(direction: impl Into<String>) -> Self {
        CalcError::NoActiveLayers {
            direction: direction.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Configuration errors are never retried; the caller has to fix the layup.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            CalcError::EmptyLayup => "EMPTY_LAYUP",
            CalcError::NoActiveLayers { .. } => "NO_ACTIVE_LAYERS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
