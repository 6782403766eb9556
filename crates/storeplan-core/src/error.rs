//! Error handling for Storeplan.
//!
//! Provides error types for the two failure domains of the layout core:
//! - Location-code contract violations (digit widths vs. actual strings)
//! - Invalid builder parameters
//!
//! All error types use `thiserror` for ergonomic error handling. A builder
//! call either produces a complete, internally consistent record list or
//! fails entirely; there is no partial output.

use thiserror::Error;

/// Location-code error type.
///
/// Raised when a code string disagrees with the configured digit widths.
/// Mismatched input fails fast here rather than being sliced at a wrong
/// boundary downstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Code string length does not match the configured widths
    #[error(
        "location code '{code}' has the wrong length, expected {expected} digits ({table_id_len} table id + {branch_num_len} branch)"
    )]
    LengthMismatch {
        /// The offending code string.
        code: String,
        /// The expected total digit count.
        expected: usize,
        /// The configured table-id digit width.
        table_id_len: usize,
        /// The configured branch-number digit width.
        branch_num_len: usize,
    },

    /// Code string contains a non-digit character
    #[error("location code '{code}' contains non-digit characters")]
    NonNumeric {
        /// The offending code string.
        code: String,
    },

    /// Configured digit width is unusable
    #[error("{field} must be between 1 and {max}, got {got}")]
    InvalidDigitWidth {
        /// The configuration field holding the bad width.
        field: String,
        /// The rejected width.
        got: usize,
        /// The widest supported width.
        max: usize,
    },
}

/// Builder parameter error type.
///
/// Raised when an "add shape" form result violates the builder contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeParamError {
    /// A count or dimension that must be positive was zero
    #[error("{field} must be greater than zero")]
    ZeroField {
        /// The offending parameter name.
        field: &'static str,
    },

    /// A required text field was empty
    #[error("{field} must not be empty")]
    EmptyField {
        /// The offending parameter name.
        field: &'static str,
    },

    /// A parameter was inconsistent with the other inputs
    #[error("{field} is invalid: {reason}")]
    Invalid {
        /// The offending parameter name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for Storeplan.
///
/// A unified error type that can represent any failure of the layout core.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Location-code error
    #[error(transparent)]
    Code(#[from] CodeError),

    /// Builder parameter error
    #[error(transparent)]
    ShapeParam(#[from] ShapeParamError),
}

impl Error {
    /// Check if this is a location-code error
    pub fn is_code_error(&self) -> bool {
        matches!(self, Error::Code(_))
    }

    /// Check if this is a builder parameter error
    pub fn is_param_error(&self) -> bool {
        matches!(self, Error::ShapeParam(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
