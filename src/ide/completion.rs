//! Completion suggestions implementation.
//!
//! Completion is token-only: it never forces a parse of the document.

use std::sync::{Arc, LazyLock};

use indexmap::IndexSet;
use regex::Regex;

use crate::base::{TextRange, TextSize};
use crate::parser::{Token, TokenKind, find_closest_token_index, is_in_character_set};

use super::catalog::{self, Detail};

/// Variable declarations, found textually so that completion works while
/// the document does not parse.
static LET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\blet\s+([\p{L}_][\p{L}\p{M}\p{Nd}_]*)").expect("let pattern is a valid regex")
});

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Variable,
    Value,
    Keyword,
    Snippet,
    Text,
    Constant,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Text => 1,
            CompletionKind::Variable => 6,
            CompletionKind::Value => 12,
            CompletionKind::Keyword => 14,
            CompletionKind::Snippet => 15,
            CompletionKind::Constant => 21,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (filled in by [`resolve_completion`]).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Whether `insert_text` uses snippet placeholders.
    pub is_snippet: bool,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            is_snippet: false,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set a snippet to insert instead of the label.
    pub fn with_snippet(mut self, snippet: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(snippet.into());
        self.is_snippet = true;
        self
    }
}

/// Result of a completion request.
#[derive(Clone, Debug)]
pub struct CompletionResult {
    pub items: Vec<CompletionItem>,
    /// Text replaced by the selected item: the identifier under the cursor,
    /// or an empty range at the cursor.
    pub replace_range: TextRange,
}

impl CompletionResult {
    /// Create an empty result.
    pub fn empty(offset: TextSize) -> Self {
        Self {
            items: Vec::new(),
            replace_range: TextRange::empty(offset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Get completions at `offset`.
///
/// Inside a multi-character token other than an identifier (a string, `<<`)
/// nothing is offered. Inside a character set the character-set catalog is
/// offered; elsewhere the declared variables followed by the expression
/// catalog.
pub fn completions(text: &str, tokens: &[Token], offset: TextSize) -> CompletionResult {
    let index = find_closest_token_index(tokens, offset);
    let current = tokens.get(index);

    if let Some(token) = current {
        if token.kind != TokenKind::Identifier && token.start() < offset && offset < token.end() {
            return CompletionResult::empty(offset);
        }
    }

    let replace_range = match current {
        Some(token)
            if token.kind == TokenKind::Identifier
                && token.start() <= offset
                && offset <= token.end() =>
        {
            token.range
        }
        _ => TextRange::empty(offset),
    };

    let items = if is_in_character_set(tokens, index, offset) {
        catalog::character_set_completions().to_vec()
    } else {
        let variables = declared_variables(text)
            .into_iter()
            .map(|name| {
                CompletionItem::new(name, CompletionKind::Variable)
                    .with_detail(Detail::Variable.as_str())
            });
        variables
            .chain(catalog::expression_completions().iter().cloned())
            .collect()
    };

    CompletionResult {
        items,
        replace_range,
    }
}

/// Fill in the documentation of a catalog item.
pub fn resolve_completion(mut item: CompletionItem) -> CompletionItem {
    if item.documentation.is_none() {
        let doc = item
            .detail
            .as_deref()
            .and_then(Detail::parse)
            .and_then(|detail| catalog::lookup_documentation(detail, &item.label));
        item.documentation = doc;
    }
    item
}

/// Names of all `let` declarations in `text`, deduplicated, in order.
fn declared_variables(text: &str) -> IndexSet<&str> {
    LET_DECLARATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .collect()
}
