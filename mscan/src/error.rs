//! Errors that end an mscan run.
//!
//! Lexical problems in the scanned source are not errors here: they are
//! diagnostics, printed as they are found. Only after the whole listing is
//! written does a non-empty diagnostic count turn into
//! [`MscanError::Lexical`].

use minic_util::DiagnosticError;
use thiserror::Error;

/// Why an mscan command failed.
#[derive(Error, Debug)]
pub enum MscanError {
    /// `mscan.toml` could not be read, parsed, or written.
    #[error("configuration: {0}")]
    Config(String),

    /// A command-line value was rejected.
    #[error("{0}")]
    Validation(String),

    /// Reading the source or writing the listing failed.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A token could not be encoded as JSON.
    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),

    /// The scanned source had lexical errors.
    #[error("lexical errors: {0}")]
    Lexical(#[from] DiagnosticError),
}

/// Result type for mscan commands.
pub type Result<T> = std::result::Result<T, MscanError>;
