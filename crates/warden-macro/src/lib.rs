//! Warden Macro - compile-once, expand-many templates for rule actions.
//!
//! Rule actions (log messages, response bodies, header injection) embed
//! templates such as `"blocked request id %{tx.id}"`. This crate compiles
//! them into an immutable token sequence at rule-load time and expands that
//! sequence against per-transaction state on every request.
//!
//! The load/expand boundary is deliberately asymmetric:
//!
//! - **Compilation fails fast.** Malformed references, unknown collection
//!   names, and the unsupported `name:/pattern/` selector syntax all reject
//!   the template, so broken rules never load.
//! - **Expansion is total.** A missing transaction value, or no transaction
//!   at all, contributes an empty string; live traffic handling is never
//!   interrupted by a macro.
//!
//! # Example
//!
//! ```
//! use warden_macro::{Macro, MemoryState};
//! use warden_vars::Variable;
//!
//! let m = Macro::new("blocked request id %{tx.id}")?;
//!
//! let mut state = MemoryState::new();
//! state.set(Variable::Tx, "id", "abc123");
//! assert_eq!(m.expand(Some(&state)), "blocked request id abc123");
//!
//! // Absent state degrades variables to empty strings.
//! assert_eq!(m.expand(None), "blocked request id ");
//! # Ok::<(), warden_macro::MacroError>(())
//! ```

pub mod context;
pub mod error;
pub mod macros;
pub mod token;

// Re-export core types
pub use context::{MemoryState, TransactionState};
pub use error::{MacroError, Result};
pub use macros::Macro;
pub use token::MacroToken;
