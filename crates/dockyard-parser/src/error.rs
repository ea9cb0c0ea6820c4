//! Error and diagnostic system for the share-link parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! together with the text their spans point into.
//!
//! # Example
//!
//! ```
//! # use dockyard_parser::error::{Diagnostic, ErrorCode};
//! # use dockyard_parser::Span;
//!
//! let span = Span::new(10..42);
//!
//! let diag = Diagnostic::warning("malformed module entry")
//!     .with_code(ErrorCode::E002)
//!     .with_label(span, "expected `$module-<id>,count:<n>`")
//!     .with_help("the entry was skipped");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
