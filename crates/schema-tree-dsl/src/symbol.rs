use logos::Logos;

/// Structurally significant characters of the field notation.
///
/// Everything between symbols is item text and is skipped by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^()]+")]
pub enum Symbol {
    #[token("(")]
    Open,

    #[token(")")]
    Close,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }

    /// Returns a human-readable description of this symbol.
    pub fn description(self) -> &'static str {
        match self {
            Self::Open => "'('",
            Self::Close => "')'",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
