use serde::{Deserialize, Serialize};

/// Output style used when rendering a tree.
///
/// The default is one tab per nesting level and a `"- "` bullet, which is the
/// canonical rendering. Missing fields fall back to the defaults when
/// deserialized, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Prefix repeated once per nesting level.
    pub indent: String,
    /// Prefix written before every label.
    pub bullet: String,
}

impl RenderStyle {
    pub fn new(indent: impl Into<String>, bullet: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            bullet: bullet.into(),
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new("\t", "- ")
    }
}
