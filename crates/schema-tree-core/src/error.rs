use std::fmt;

/// Errors raised when growing a [`TreeNode`](crate::TreeNode).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// Insertion depth was negative.
    NegativeDepth { depth: isize },
    /// Insertion had to descend through a node that has no children yet.
    ///
    /// `depth` is the depth still left to descend when the walk stopped.
    NoChildren { depth: isize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDepth { depth } => {
                write!(f, "invalid insertion depth {depth}: must be >= 0")
            }
            Self::NoChildren { depth } => {
                write!(
                    f,
                    "cannot descend {depth} more level(s): node has no children to extend"
                )
            }
        }
    }
}

impl std::error::Error for TreeError {}
