//! Diagnostics and the handler that collects them.
//!
//! A phase reports a problem by emitting a [`Diagnostic`] into a [`Handler`].
//! Emission never aborts the phase (unless the handler was created with
//! [`Handler::new_panicking`]), which is what lets the scanner report an
//! error and keep producing tokens.

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::error::{DiagnosticError, DiagnosticResult};
use crate::Location;
use std::cell::RefCell;
use std::fmt;

/// A single reported error.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Where the offending construct started.
    pub location: Location,
    /// Catalog code, if any.
    pub code: Option<DiagnosticCode>,
    /// Additional notes, such as the byte that was found instead.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no code and no notes.
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
            code: None,
            notes: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if !self.location.is_dummy() {
            write!(f, " (at {})", self.location)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted by a phase.
///
/// Interior mutability lets builders emit through a shared reference while
/// the phase holds the handler.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: bool,
}

impl Handler {
    /// Creates a handler that collects every diagnostic.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Creates a handler that panics on the first diagnostic.
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Records a diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if anything was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Number of reported diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// A copy of every recorded diagnostic, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Codes of every recorded diagnostic, in emission order.
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics
            .borrow()
            .iter()
            .filter_map(|d| d.code)
            .collect()
    }

    /// Fails if anything was reported.
    pub fn check(&self) -> DiagnosticResult<()> {
        match self.error_count() {
            0 => Ok(()),
            count => Err(DiagnosticError::ErrorsReported { count }),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
