//! # pomsky-ide
//!
//! Editor intelligence for the Pomsky regex language: lexing, variable scope
//! resolution, IDE features and supervision of the external compiler.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → Document lifecycle, validation, event bus
//!   ↓
//! compiler  → Compiler CLI: config, arguments, JSON output, diagnostics
//!   ↓
//! process   → Keyed single-flight process supervision
//!
//! ide       → IDE features (completion, hover, goto-def, rename, inlay hints)
//!   ↓
//! hir       → Scope resolution over the rule tree
//!   ↓
//! syntax    → Rule tree produced by the external parser
//!   ↓
//! parser    → Logos lexer and token queries
//!   ↓
//! base      → Primitives (TextRange, UTF-16 offsets)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → ide;
//          process → compiler → session)
// ============================================================================

/// Foundation types: TextRange, UTF-8 ↔ UTF-16 offsets
pub mod base;

/// Parser: Logos lexer, token queries, reserved words
pub mod parser;

/// Syntax: the rule tree and the parser seam
pub mod syntax;

/// Scope resolution: definitions, usages, rename names
pub mod hir;

/// IDE features: completion, hover, goto-definition, find-references, rename
pub mod ide;

/// Child process supervision
pub mod process;

/// The external Pomsky compiler
pub mod compiler;

/// Session context tying documents, compiler and events together
pub mod session;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{TextRange, TextSize, Utf16Range};
pub use compiler::{Compiler, Config, Flavor};
pub use ide::{Analysis, AnalysisHost};
pub use parser::{Token, TokenKind, tokenize};
pub use process::{ProcessError, ProcessSupervisor};
pub use session::{Session, SessionEvent};
pub use syntax::{Rule, RuleParser};
