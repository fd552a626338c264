//! Name resolution over the rule tree
//!
//! ## Key Functions
//!
//! - [`find_name`] - the variable or `let` name under an offset
//! - [`find_definition`] - the binding a name refers to, honoring shadowing
//! - [`find_usages`] - every variable bound by a given `let`
//! - [`reduce_let_stmts`] - flatten a chain of `let` statements
//! - [`sanitize_name`] - validate a rename target
//!
//! All functions are pure and borrow the tree read-only. A miss is an empty
//! result, never an error.

mod rename;
mod scope;

pub use rename::sanitize_name;
pub use scope::{find_definition, find_name, find_usages, reduce_let_stmts};
