//! minic-util - Diagnostics Foundation for the Mini C Toolchain
//!
//! This crate provides the types every Mini C front-end phase uses to report
//! problems with the input: source locations, diagnostic codes, diagnostics
//! themselves, and the [`Handler`] that collects them.
//!
//! # Overview
//!
//! Phases never print errors directly. They build a [`Diagnostic`] (usually
//! through a [`DiagnosticBuilder`]) and emit it into a [`Handler`] owned by
//! the caller. The caller then decides the policy: print everything, abort on
//! the first error, or collect and inspect them in tests.
//!
//! # Example Usage
//!
//! ```
//! use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Location};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("invalid character")
//!     .code(DiagnosticCode::E_INVALID_CHARACTER)
//!     .location(Location::new(3, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`diagnostic`] - Codes, diagnostics, builder, and handler
//! - [`location`] - Line/column positions used to anchor diagnostics
//! - [`error`] - Error types for diagnostic processing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod location;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{DiagnosticError, DiagnosticResult};
pub use location::Location;
