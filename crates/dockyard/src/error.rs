//! Error types for Dockyard operations.
//!
//! This module provides the main error type [`DockyardError`] which wraps
//! the error conditions that can occur while turning a share link into a
//! blueprint file. Placement itself never fails, so there is no layout
//! variant.

use std::io;

use thiserror::Error;

use dockyard_parser::error::ParseError;

use crate::config::ConfigError;

/// The main error type for Dockyard operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured diagnostics with spans into
/// `src`, which can be used for rich error reporting.
#[derive(Debug, Error)]
pub enum DockyardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(String),
}

impl DockyardError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

impl From<ParseError> for DockyardError {
    fn from(err: ParseError) -> Self {
        let src = err.source_text().to_string();
        Self::new_parse_error(err, src)
    }
}

impl From<crate::export::Error> for DockyardError {
    fn from(err: crate::export::Error) -> Self {
        Self::Export(err.to_string())
    }
}
