//! Core error types for minic-util crate
//!
//! This module defines the error returned when a handler's diagnostics are
//! turned into a pass/fail outcome.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// At least one error-level diagnostic was emitted
    #[error("{count} error(s) reported")]
    ErrorsReported {
        /// Number of error-level diagnostics
        count: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
