//! Collector for accumulating diagnostics while walking a module list.

use crate::error::{Diagnostic, ParseError};

/// Accumulates errors and warnings so that one pass reports every problem
/// instead of stopping at the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if an error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics,
    ///   tied to `source`.
    /// - Otherwise returns the warnings.
    pub fn finish(self, source: &str) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics, source))
        } else {
            Ok(self.diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_empty_finish_ok() {
        let warnings = DiagnosticCollector::new().finish("src").unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_collector_warnings_are_returned() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::warning("warning 2"));

        assert!(!collector.has_errors());
        assert_eq!(collector.finish("src").unwrap().len(), 2);
    }

    #[test]
    fn test_collector_error_keeps_all_diagnostics() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::error("error 1"));

        let err = collector.finish("the source").unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.source_text(), "the source");
    }
}
