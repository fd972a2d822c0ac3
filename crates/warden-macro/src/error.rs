//! Error types for macro compilation.
//!
//! All variants are load-time failures: a template that compiles can no
//! longer fail. Expansion is total by design, so there is no expand-time
//! error type at all.

use thiserror::Error;

/// Result type for macro operations.
pub type Result<T> = std::result::Result<T, MacroError>;

/// Errors rejected at rule-load time.
///
/// `MalformedVariable` and `UnknownVariable` are distinct variants rather
/// than message substrings so callers can choose different remediation
/// (reject the rule file vs. warn about a likely typo).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    /// The template string was empty.
    #[error("empty macro")]
    EmptyMacro,

    /// A reference was syntactically invalid: unterminated or nested braces,
    /// an empty spec, a missing collection or key around the dot, a key on a
    /// scalar variable, a keyed collection without a key, or the unsupported
    /// `name:/pattern/` selector form.
    #[error("malformed variable: {0}")]
    MalformedVariable(String),

    /// The collection name was syntactically valid but not in the registry.
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
}
