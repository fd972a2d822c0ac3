//! Warden Vars - rule-language variable identities.
//!
//! This crate defines the finite set of collections a Warden rule may
//! reference ([`Variable`]) and the case-insensitive name registry used to
//! resolve rule text into identities at load time. Identities are plain
//! `Copy` values; everything downstream (macro compilation, rule actions,
//! audit output) passes them around instead of strings.
//!
//! # Example
//!
//! ```
//! use warden_vars::Variable;
//!
//! let var = Variable::by_name("args_get").expect("known collection");
//! assert_eq!(var, Variable::ArgsGet);
//! assert_eq!(var.name(), "ARGS_GET");
//! assert!(var.is_keyed());
//! ```

pub mod variable;

pub use variable::Variable;
