//! The ParseError type for wrapping parsing diagnostics.

use thiserror::Error;

use crate::error::Diagnostic;

/// Error type for share-link parsing.
///
/// Wraps one or more diagnostics together with the text their spans index
/// into: the trimmed link for link-level problems, or the decoded module
/// list for entry-level problems.
#[derive(Debug, Clone, Error)]
#[error("{}", summarize(.diagnostics))]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
    source_text: String,
}

impl ParseError {
    /// Create a new parse error from diagnostics and the text they refer to.
    pub fn new(diagnostics: Vec<Diagnostic>, source_text: impl Into<String>) -> Self {
        Self {
            diagnostics,
            source_text: source_text.into(),
        }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The text diagnostic spans refer to.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// The first diagnostic, plus how many more follow it.
fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => String::new(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (+{} more)", rest.len()),
    }
}
