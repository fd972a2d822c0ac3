//! Macro compilation and expansion.
//!
//! Templates are compiled once, at rule-load time, into a flat token
//! sequence. Compilation fails fast on authoring mistakes; expansion walks
//! the tokens against a transaction and cannot fail, so a missing runtime
//! value degrades to an empty string instead of interrupting traffic.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::context::TransactionState;
use crate::error::{MacroError, Result};
use crate::token::MacroToken;
use warden_vars::Variable;

/// A compiled macro template, e.g. `"blocked request id %{tx.id}"`.
///
/// Immutable after construction and shared read-only across any number of
/// concurrent expansions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    source: String,
    tokens: Vec<MacroToken>,
}

impl Macro {
    /// Compiles `source` into a macro.
    ///
    /// Any error rejects the whole template; no partial token sequence is
    /// ever returned.
    pub fn new(source: &str) -> Result<Self> {
        let tokens = compile(source)?;
        tracing::debug!(source, tokens = tokens.len(), "compiled macro");
        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled token sequence, in document order.
    pub fn tokens(&self) -> &[MacroToken] {
        &self.tokens
    }

    /// Expands the macro against `state`.
    ///
    /// Total: literal tokens are emitted verbatim; variable tokens perform a
    /// single lookup and contribute the empty string when the state is
    /// absent or the lookup misses. Allocates one output buffer, pre-sized
    /// to the template length.
    pub fn expand(&self, state: Option<&dyn TransactionState>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for token in &self.tokens {
            if token.is_literal() {
                out.push_str(&token.raw);
            } else if let Some(value) = state.and_then(|s| s.value(token.variable, &token.key)) {
                out.push_str(value);
            }
        }
        out
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Tokenizes `source`, alternating maximal literal runs and references.
fn compile(source: &str) -> Result<Vec<MacroToken>> {
    if source.is_empty() {
        return Err(MacroError::EmptyMacro);
    }

    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        // Only `%{` opens a reference; a lone `%` is literal text.
        if c == '%' && chars.peek() == Some(&'{') {
            chars.next();
            if !literal.is_empty() {
                tokens.push(MacroToken::literal(std::mem::take(&mut literal)));
            }
            tokens.push(reference(&mut chars)?);
            continue;
        }
        literal.push(c);
    }

    if !literal.is_empty() {
        tokens.push(MacroToken::literal(literal));
    }

    Ok(tokens)
}

/// Scans a reference body after its `%{`, up to the closing brace.
fn reference(chars: &mut Peekable<Chars<'_>>) -> Result<MacroToken> {
    let mut spec = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some('{') => {
                return Err(MacroError::MalformedVariable(format!(
                    "nested brace in %{{{spec}{{"
                )));
            }
            Some(c) => spec.push(c),
            None => {
                return Err(MacroError::MalformedVariable(format!(
                    "unterminated reference %{{{spec}"
                )));
            }
        }
    }
    parse_spec(&spec)
}

/// Validates and resolves a `collection[.key]` spec.
fn parse_spec(spec: &str) -> Result<MacroToken> {
    if spec.is_empty() {
        return Err(MacroError::MalformedVariable("empty reference %{}".into()));
    }
    // The rule language's regex selector (`name:/pattern/`) is valid in
    // rule targets but unsupported inside macros, whatever the name is.
    if spec.contains(':') {
        return Err(MacroError::MalformedVariable(format!(
            "selector syntax is not supported in macros: {spec}"
        )));
    }

    let (name, key) = match spec.split_once('.') {
        Some((name, key)) => (name, key),
        None => (spec, ""),
    };
    if name.is_empty() {
        return Err(MacroError::MalformedVariable(format!(
            "missing collection name: {spec}"
        )));
    }
    if key.is_empty() && spec.contains('.') {
        return Err(MacroError::MalformedVariable(format!(
            "missing key after dot: {spec}"
        )));
    }

    let variable =
        Variable::by_name(name).ok_or_else(|| MacroError::UnknownVariable(name.to_string()))?;
    if variable.is_keyed() && key.is_empty() {
        return Err(MacroError::MalformedVariable(format!(
            "collection {variable} requires a key: {spec}"
        )));
    }
    if !variable.is_keyed() && !key.is_empty() {
        return Err(MacroError::MalformedVariable(format!(
            "scalar {variable} takes no key: {spec}"
        )));
    }

    Ok(MacroToken::variable(spec, variable, key))
}
