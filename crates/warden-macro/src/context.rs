//! Transaction state abstraction consumed during expansion.

use std::collections::HashMap;
use warden_vars::Variable;

/// Read-only view over per-transaction data.
///
/// The engine's transaction object implements this; the macro core only ever
/// reads through it, once per variable token per expansion. Implementations
/// must be safe to call concurrently for distinct transactions; a single
/// transaction is single-writer and is not mutated during an expansion call.
pub trait TransactionState {
    /// Looks up `key` inside `variable`'s collection.
    ///
    /// Scalar variables are addressed with an empty key. `None` means the
    /// value is absent, which the expander renders as the empty string.
    fn value(&self, variable: Variable, key: &str) -> Option<&str>;
}

/// `HashMap`-backed [`TransactionState`] for tests and embedders that don't
/// carry a full transaction object.
#[derive(Debug, Default, Clone)]
pub struct MemoryState {
    collections: HashMap<Variable, HashMap<String, String>>,
}

impl MemoryState {
    /// Creates an empty state; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `variable[key]` to `value`, replacing any previous value.
    ///
    /// Use an empty key for scalar variables.
    pub fn set(&mut self, variable: Variable, key: impl Into<String>, value: impl Into<String>) {
        self.collections
            .entry(variable)
            .or_default()
            .insert(key.into(), value.into());
    }
}

impl TransactionState for MemoryState {
    fn value(&self, variable: Variable, key: &str) -> Option<&str> {
        self.collections
            .get(&variable)?
            .get(key)
            .map(String::as_str)
    }
}
