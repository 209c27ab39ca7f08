//! Fluent construction of diagnostics.
//!
//! The scanner reports every problem through [`DiagnosticBuilder`]: pick the
//! message, attach a code and the location where the offending token
//! started, then emit into a [`Handler`].

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Location;

/// Builds one [`Diagnostic`] step by step.
///
/// # Examples
///
/// ```
/// use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Location};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("next character must be &")
///     .code(DiagnosticCode::E_EXPECTED_AMPERSAND)
///     .location(Location::new(1, 4))
///     .note("found 'x'")
///     .emit(&handler);
///
/// assert_eq!(handler.codes(), vec![DiagnosticCode::E_EXPECTED_AMPERSAND]);
/// ```
#[must_use = "a diagnostic does nothing until it is built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts an error with no location yet.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(message, Location::DUMMY),
        }
    }

    /// Attaches a catalog code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Sets where the problem starts.
    pub fn location(mut self, location: Location) -> Self {
        self.diagnostic.location = location;
        self
    }

    /// Appends a note line.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finishes without emitting.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finishes and hands the diagnostic to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
