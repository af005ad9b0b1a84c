//! Error types for the weekly pay calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few conditions that stop a payroll run. Malformed employee
//! records are not errors at this level; they are rejected by the record
//! parser and counted as skipped.

use thiserror::Error;

/// The main error type for the weekly pay calculator.
///
/// # Example
///
/// ```
/// use weekly_pay::error::PayrollError;
///
/// let error = PayrollError::InputNotFound {
///     path: "res/missing.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee file not found: res/missing.txt");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee input file could not be read.
    #[error("Employee file not found: {path}")]
    InputNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// The employee input file exists but could not be read as text.
    #[error("Failed to read employee file '{path}': {message}")]
    InputReadError {
        /// The path that failed to read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable classification.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
