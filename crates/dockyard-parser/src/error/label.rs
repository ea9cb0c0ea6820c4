//! Labeled spans attached to diagnostics.

use crate::span::Span;

/// A message pinned to a span of the parsed text.
///
/// A diagnostic usually carries one primary label marking the offending
/// text; secondary labels point at related context, such as the parameter
/// an entry was read from.
///
/// ```text
/// warning[E002]: malformed module entry
///   |
/// 1 | @$module-module_gen_prod_graphene_01,count:4;,$modul-x,count:2
///   |                                               ^^^^^^^^^^^^^^^^ expected `$module-<id>,count:<n>`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The labeled span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(4..9), "bad count");

        assert_eq!(label.span(), Span::new(4..9));
        assert_eq!(label.message(), "bad count");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..2), "in this parameter");
        assert!(!label.is_primary());
    }
}
