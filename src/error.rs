//! Error types for the Child Support Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, coercing, and
//! calculating a support case.

use thiserror::Error;

/// The main error type for the Child Support Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every error is
/// detected synchronously and aborts the calculation; there is no partial or
/// degraded result.
///
/// # Example
///
/// ```
/// use support_engine::error::EngineError;
///
/// let error = EngineError::MissingFields {
///     fields: vec!["children_outside".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing required fields: children_outside");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more required input fields were absent.
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields {
        /// Every required field name that was absent, in declaration order.
        fields: Vec<String>,
    },

    /// A field's textual value could not be coerced to its required type.
    #[error("Field '{field}' value '{value}' is not a valid {expected}")]
    TypeConversion {
        /// The field whose value failed to parse.
        field: String,
        /// The scrubbed value that failed to parse.
        value: String,
        /// The type the field is declared to carry.
        expected: &'static str,
    },

    /// A coerced value violated a documented invariant.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue {
        /// The field carrying the invalid value.
        field: String,
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
