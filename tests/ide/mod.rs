//! IDE feature tests
//!
//! Tests for:
//! - Code completion
//! - Hover information
//! - Go to definition
//! - Find references
//! - Rename
//! - Inlay hints
//! - Analysis host and document cache

pub mod tests_analysis;
pub mod tests_completion;
pub mod tests_goto;
pub mod tests_hover;
