use std::fmt;

use schema_tree_core::TreeError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that occur while parsing the field notation.
///
/// Malformed input is not repaired: the first error aborts the parse and no
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A scan step found fewer than two symbols in the unconsumed input,
    /// which happens on truncated or unbalanced notation.
    MissingSymbols { found: usize, span: Span },

    /// The symbols asked for items to be nested under a group that does not exist.
    Tree { source: TreeError, span: Span },
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSymbols { found, span } => {
                write!(
                    f,
                    "unbalanced notation at {span}: expected two of '(' or ')', found {found}"
                )
            }
            Self::Tree { source, span } => {
                write!(f, "misplaced group at {span}: {source}")
            }
        }
    }
}

impl std::error::Error for DslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tree { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn span_display() {
        let span = Span::new(10, 20);
        assert_eq!(span.to_string(), "10..20");
    }

    #[test]
    fn error_display_missing_symbols() {
        let err = DslError::MissingSymbols {
            found: 1,
            span: Span::new(4, 9),
        };
        let msg = err.to_string();
        assert!(msg.contains("unbalanced notation at 4..9"));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn error_display_tree() {
        let err = DslError::Tree {
            source: TreeError::NoChildren { depth: 1 },
            span: Span::new(0, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("misplaced group at 0..3"));
        assert!(msg.contains("no children"));
    }

    #[test]
    fn tree_error_has_source() {
        let err = DslError::Tree {
            source: TreeError::NegativeDepth { depth: -1 },
            span: Span::new(0, 1),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_symbols_has_no_source() {
        let err = DslError::MissingSymbols {
            found: 0,
            span: Span::new(0, 0),
        };
        assert!(err.source().is_none());
    }
}
