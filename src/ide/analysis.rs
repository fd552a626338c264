//! AnalysisHost and Analysis - Document state for IDE features.
//!
//! The `AnalysisHost` owns the per-document cache and the external parser,
//! and hands out `Analysis` snapshots for querying. A snapshot holds one
//! version of one document, so every query on it sees the same text.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new(parser);
//!
//! // Observe the latest editor content
//! let analysis = host.analysis_for("file:///a.pomsky", "let a = 'x'; a");
//!
//! let hover = analysis.hover(offset);
//! let goto = analysis.goto_definition(offset);
//! ```

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{TextRange, TextSize, Utf16Range, byte_range_to_utf16};
use crate::parser::{Token, tokenize};
use crate::syntax::{Rule, RuleOrErrors, RuleParser};

use super::{
    CompletionResult, GotoResult, HoverResult, InlayHint, ReferenceResult, RenameResult,
};

const CACHE_TARGET: &str = "pomsky_ide::cache";

// ============================================================================
// DOCUMENT CACHE
// ============================================================================

/// Everything derived from one version of a document.
///
/// Tokens are computed eagerly; the parse runs at most once, on first use.
#[derive(Debug)]
pub struct DocumentInfo {
    content: Arc<str>,
    tokens: Arc<[Token]>,
    parsed: OnceLock<RuleOrErrors>,
}

impl DocumentInfo {
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let tokens = tokenize(&content).into();
        Self {
            content,
            tokens,
            parsed: OnceLock::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The parse result, parsing on first call.
    pub fn parsed(&self, parser: &dyn RuleParser) -> &RuleOrErrors {
        self.parsed.get_or_init(|| {
            debug!(target: CACHE_TARGET, len = self.content.len(), "parsing document");
            parser.parse(&self.content)
        })
    }

    /// Whether the document has been parsed yet.
    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }
}

/// Per-document cache keyed by document identity.
///
/// An entry is replaced whenever the observed content differs from the
/// cached content.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: Mutex<FxHashMap<String, Arc<DocumentInfo>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached info for `key`, refreshed if `content` changed.
    pub fn get_info(&self, key: &str, content: &str) -> Arc<DocumentInfo> {
        let mut documents = self.documents.lock();
        if let Some(info) = documents.get(key) {
            if info.content() == content {
                return info.clone();
            }
        }

        debug!(target: CACHE_TARGET, key, len = content.len(), "refreshing document");
        let info = Arc::new(DocumentInfo::new(content));
        documents.insert(key.to_string(), info.clone());
        info
    }

    /// The cached info for `key`, without refreshing.
    pub fn get(&self, key: &str) -> Option<Arc<DocumentInfo>> {
        self.documents.lock().get(key).cloned()
    }

    /// Keys of every cached document.
    pub fn keys(&self) -> Vec<String> {
        self.documents.lock().keys().cloned().collect()
    }

    pub fn remove(&self, key: &str) -> Option<Arc<DocumentInfo>> {
        self.documents.lock().remove(key)
    }

    pub fn clear(&self) {
        self.documents.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// ANALYSIS HOST
// ============================================================================

/// Owns the document cache and the external parser.
pub struct AnalysisHost {
    cache: DocumentCache,
    parser: Arc<dyn RuleParser>,
}

impl AnalysisHost {
    /// Create a host backed by `parser`.
    pub fn new(parser: impl RuleParser + 'static) -> Self {
        Self {
            cache: DocumentCache::new(),
            parser: Arc::new(parser),
        }
    }

    /// Record the latest content of a document.
    pub fn set_file_content(&self, key: &str, content: &str) -> Arc<DocumentInfo> {
        self.cache.get_info(key, content)
    }

    /// Drop a document from the cache.
    pub fn remove_file(&self, key: &str) {
        self.cache.remove(key);
    }

    /// Keys of every known document.
    pub fn files(&self) -> Vec<String> {
        self.cache.keys()
    }

    pub fn has_file(&self, key: &str) -> bool {
        self.cache.get(key).is_some()
    }

    /// Drop every cached document.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Snapshot of the last content recorded for `key`.
    pub fn analysis(&self, key: &str) -> Option<Analysis> {
        let document = self.cache.get(key)?;
        Some(Analysis {
            document,
            parser: self.parser.clone(),
        })
    }

    /// Record `content` for `key` and return a snapshot of it.
    pub fn analysis_for(&self, key: &str, content: &str) -> Analysis {
        Analysis {
            document: self.cache.get_info(key, content),
            parser: self.parser.clone(),
        }
    }
}

// ============================================================================
// ANALYSIS SNAPSHOT
// ============================================================================

/// An immutable snapshot of one document.
///
/// Offsets are UTF-8 byte offsets into [`Analysis::text`].
pub struct Analysis {
    document: Arc<DocumentInfo>,
    parser: Arc<dyn RuleParser>,
}

impl Analysis {
    pub fn text(&self) -> &str {
        self.document.content()
    }

    pub fn tokens(&self) -> &[Token] {
        self.document.tokens()
    }

    /// The parsed rule tree, or `None` if the document has parse errors.
    pub fn rule(&self) -> Option<&Rule> {
        self.document.parsed(self.parser.as_ref()).as_ref().ok()
    }

    /// Convert a byte range of this document to UTF-16 code units.
    pub fn utf16_range(&self, range: TextRange) -> Utf16Range {
        byte_range_to_utf16(
            self.text(),
            usize::from(range.start()),
            usize::from(range.end()),
        )
    }

    // ==================== Token-based features ====================

    /// Get completions at an offset.
    pub fn completions(&self, offset: TextSize) -> CompletionResult {
        super::completions(self.text(), self.tokens(), offset)
    }

    /// Get hover information at an offset.
    pub fn hover(&self, offset: TextSize) -> Option<HoverResult> {
        super::hover(self.text(), self.tokens(), offset)
    }

    // ==================== Tree-based features ====================

    /// Go to definition at an offset.
    pub fn goto_definition(&self, offset: TextSize) -> GotoResult {
        match self.rule() {
            Some(rule) => super::goto_definition(rule, offset),
            None => GotoResult::empty(),
        }
    }

    /// Find all references to the variable at an offset.
    pub fn find_references(&self, offset: TextSize, include_declaration: bool) -> ReferenceResult {
        match self.rule() {
            Some(rule) => super::find_references(self.text(), rule, offset, include_declaration),
            None => ReferenceResult::empty(),
        }
    }

    /// The range that a rename at `offset` would replace.
    pub fn prepare_rename(&self, offset: TextSize) -> Option<TextRange> {
        super::prepare_rename(self.text(), self.rule()?, offset)
    }

    /// Rename the variable at an offset.
    pub fn rename(&self, offset: TextSize, new_name: &str) -> Option<RenameResult> {
        super::rename(self.text(), self.rule()?, offset, new_name)
    }

    /// Get inlay hints for the document.
    pub fn inlay_hints(&self) -> Vec<InlayHint> {
        match self.rule() {
            Some(rule) => super::inlay_hints(rule),
            None => Vec::new(),
        }
    }
}
