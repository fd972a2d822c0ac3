//! Compiled token representation.

use warden_vars::Variable;

/// One unit of a compiled macro: either a literal run or a variable
/// reference.
///
/// Tokens are plain immutable values with structural equality, so tests can
/// assert against expected tokens directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroToken {
    /// Original source slice: the literal text itself, or the
    /// `collection[.key]` spec without its `%{`/`}` delimiters. Kept for
    /// diagnostics; expansion never reads it for variable tokens.
    pub raw: String,
    /// Resolved identity, or [`Variable::Unknown`] for literal tokens.
    pub variable: Variable,
    /// Collection key; empty for literal tokens and scalar variables.
    pub key: String,
}

impl MacroToken {
    /// Builds a literal token carrying `text` verbatim.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            raw: text.into(),
            variable: Variable::Unknown,
            key: String::new(),
        }
    }

    /// Builds a variable token for `variable` addressed by `key`.
    pub fn variable(raw: impl Into<String>, variable: Variable, key: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            variable,
            key: key.into(),
        }
    }

    /// Whether this token contributes literal text rather than a lookup.
    pub fn is_literal(&self) -> bool {
        self.variable == Variable::Unknown
    }
}
