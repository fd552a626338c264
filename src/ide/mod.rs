//! IDE features - High-level APIs for editor requests.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the editor boundary
//! 3. **Token-first**: completion and hover never force a parse
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use pomsky_ide::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new(parser);
//! let analysis = host.analysis_for("file:///a.pomsky", "let a = 'x'; a");
//! let targets = analysis.goto_definition(offset);
//! ```

mod analysis;
pub mod catalog;
mod completion;
mod goto;
mod hover;
mod inlay_hints;
mod references;
mod rename;
mod unicode_names;

pub use analysis::{Analysis, AnalysisHost, DocumentCache, DocumentInfo};
pub use catalog::Detail;
pub use completion::{
    CompletionItem, CompletionKind, CompletionResult, completions, resolve_completion,
};
pub use goto::{GotoResult, goto_definition};
pub use hover::{HoverResult, hover};
pub use inlay_hints::{InlayHint, InlayHintKind, inlay_hints};
pub use references::{Reference, ReferenceResult, find_references};
pub use rename::{RenameResult, TextEdit, prepare_rename, rename};
