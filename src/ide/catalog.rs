//! Static completion catalog.
//!
//! Two lists: expression-level items (built-ins, snippets, keywords) and
//! items valid inside a character set. Documentation is kept out of the
//! lists and looked up by `(detail, label)` when an item is resolved.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;

use super::completion::{CompletionItem, CompletionKind};
use super::unicode_names::{BLOCKS, GENERAL_CATEGORIES, PROPERTIES, SCRIPTS};

/// Category shown next to a completion label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Detail {
    BuiltIn,
    Snippet,
    Keyword,
    Character,
    CharClass,
    GeneralCategory,
    Script,
    Block,
    Property,
    Variable,
}

impl Detail {
    pub fn as_str(&self) -> &'static str {
        match self {
            Detail::BuiltIn => "built-in",
            Detail::Snippet => "snippet",
            Detail::Keyword => "keyword",
            Detail::Character => "character",
            Detail::CharClass => "char-class",
            Detail::GeneralCategory => "general-category",
            Detail::Script => "script",
            Detail::Block => "block",
            Detail::Property => "property",
            Detail::Variable => "variable",
        }
    }

    pub fn parse(detail: &str) -> Option<Self> {
        Some(match detail {
            "built-in" => Detail::BuiltIn,
            "snippet" => Detail::Snippet,
            "keyword" => Detail::Keyword,
            "character" => Detail::Character,
            "char-class" => Detail::CharClass,
            "general-category" => Detail::GeneralCategory,
            "script" => Detail::Script,
            "block" => Detail::Block,
            "property" => Detail::Property,
            "variable" => Detail::Variable,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    Expression,
    CharacterSet,
}

enum Entry {
    Doc(&'static str),
    Snippet {
        snippet: &'static str,
        doc: &'static str,
    },
    /// Same documentation as another label in the same table.
    Alias(&'static str),
}

struct Catalog {
    expression: Vec<CompletionItem>,
    character_set: Vec<CompletionItem>,
    docs: FxHashMap<Detail, FxHashMap<&'static str, Arc<str>>>,
}

impl Catalog {
    fn new() -> Self {
        let mut catalog = Self {
            expression: Vec::new(),
            character_set: Vec::new(),
            docs: FxHashMap::default(),
        };

        catalog.add(Context::Expression, Detail::BuiltIn, CompletionKind::Value, BUILT_INS);
        catalog.add(Context::Expression, Detail::Snippet, CompletionKind::Snippet, EXPR_SNIPPETS);
        catalog.add(Context::Expression, Detail::Snippet, CompletionKind::Snippet, STMT_SNIPPETS);
        catalog.add(Context::Expression, Detail::Keyword, CompletionKind::Keyword, STMT_KEYWORDS);
        catalog.add(Context::Expression, Detail::Keyword, CompletionKind::Keyword, EXPR_KEYWORDS);

        catalog.add(Context::CharacterSet, Detail::Snippet, CompletionKind::Snippet, SET_SNIPPETS);
        catalog.add(Context::CharacterSet, Detail::Character, CompletionKind::Text, CHARACTERS);
        catalog.add(Context::CharacterSet, Detail::CharClass, CompletionKind::Constant, CHAR_CLASSES);
        catalog.add_generated(
            Context::CharacterSet,
            Detail::GeneralCategory,
            "general category",
            GENERAL_CATEGORIES,
        );
        catalog.add_generated(Context::CharacterSet, Detail::Script, "script", SCRIPTS);
        catalog.add_generated(Context::CharacterSet, Detail::Block, "Unicode block", BLOCKS);
        catalog.add_generated(
            Context::CharacterSet,
            Detail::Property,
            "Unicode property",
            PROPERTIES,
        );

        catalog
    }

    fn add(
        &mut self,
        context: Context,
        detail: Detail,
        kind: CompletionKind,
        table: &'static [(&'static str, Entry)],
    ) {
        for (label, entry) in table {
            let mut entry = entry;
            // Alias chains are short; a missing target ends the walk.
            while let Entry::Alias(target) = entry {
                match table.iter().find(|(l, _)| l == target) {
                    Some((_, next)) => entry = next,
                    None => break,
                }
            }

            let item = CompletionItem::new(*label, kind).with_detail(detail.as_str());
            let (item, doc) = match entry {
                Entry::Doc(doc) => (item, *doc),
                Entry::Snippet { snippet, doc } => (item.with_snippet(*snippet), *doc),
                Entry::Alias(_) => continue,
            };

            self.insert_doc(detail, label, Arc::from(doc));
            self.items_mut(context).push(item);
        }
    }

    /// Add Unicode names; each group is a canonical name and its aliases.
    fn add_generated(
        &mut self,
        context: Context,
        detail: Detail,
        noun: &str,
        labels: &'static [&'static [&'static str]],
    ) {
        for group in labels {
            let Some((canonical, aliases)) = group.split_first() else {
                continue;
            };

            self.insert_doc(detail, canonical, Arc::from(format!("The '{canonical}' {noun}")));
            self.items_mut(context).push(
                CompletionItem::new(*canonical, CompletionKind::Constant)
                    .with_detail(detail.as_str()),
            );

            for alias in aliases {
                self.insert_doc(
                    detail,
                    alias,
                    Arc::from(format!("Alias for the '{canonical}' {noun}")),
                );
                self.items_mut(context).push(
                    CompletionItem::new(*alias, CompletionKind::Constant)
                        .with_detail(detail.as_str()),
                );
            }
        }
    }

    fn insert_doc(&mut self, detail: Detail, label: &'static str, doc: Arc<str>) {
        self.docs.entry(detail).or_default().insert(label, doc);
    }

    fn items_mut(&mut self, context: Context) -> &mut Vec<CompletionItem> {
        match context {
            Context::Expression => &mut self.expression,
            Context::CharacterSet => &mut self.character_set,
        }
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// Items offered outside of character sets.
pub fn expression_completions() -> &'static [CompletionItem] {
    &CATALOG.expression
}

/// Items offered inside `[...]`.
pub fn character_set_completions() -> &'static [CompletionItem] {
    &CATALOG.character_set
}

/// Markdown documentation for a catalog item.
pub fn lookup_documentation(detail: Detail, label: &str) -> Option<Arc<str>> {
    CATALOG.docs.get(&detail)?.get(label).cloned()
}

// ============================================================================
// TABLES
// ============================================================================

const BUILT_INS: &[(&str, Entry)] = &[
    ("Start", Entry::Doc("Start of the string. Equivalent to `^`.")),
    ("End", Entry::Doc("End of the string. Equivalent to `$`.")),
    ("Codepoint", Entry::Doc("A single code point.")),
    ("Grapheme", Entry::Doc("A single grapheme cluster.")),
    ("C", Entry::Alias("Codepoint")),
    ("G", Entry::Alias("Grapheme")),
];

const EXPR_SNIPPETS: &[(&str, Entry)] = &[
    (
        "range",
        Entry::Snippet {
            snippet: "range '${1:0}'-'${2:255}'",
            doc: "Matches a range of numbers. Use this if the number may be more than 1 code point.

### Examples:
~~~pomsky
range '0'-'255'
range '0'-'10FFFF' base 16
~~~",
        },
    ),
    (
        "base",
        Entry::Snippet {
            snippet: "base ${0:16}",
            doc: "Comes after a `range` expression to set the number base, e.g. 16 for hexadecimal.

### Example:
~~~pomsky
range '0'-'FFF' base 16
~~~",
        },
    ),
    (
        "atomic",
        Entry::Snippet {
            snippet: "atomic($0)",
            doc: "A group that discards all backtracking positions inside it when exited.

### Example:
~~~pomsky
atomic('bc' | 'b') 'c'
~~~",
        },
    ),
    (
        "regex",
        Entry::Snippet {
            snippet: "regex '${0:(?0)}'",
            doc: "An inline regular expression, embedded in the output unchanged. \
Only use it for features Pomsky does not support yet, since the output cannot be checked.

### Example:
~~~pomsky
let recurse = regex '\\g<0>';
~~~",
        },
    ),
];

const STMT_SNIPPETS: &[(&str, Entry)] = &[(
    "let",
    Entry::Snippet {
        snippet: "let ${1:var_name} = $0;\n",
        doc: "Declares a variable.

### Example
~~~pomsky
let greeting = 'Hello';
greeting ' world'
~~~",
    },
)];

const STMT_KEYWORDS: &[(&str, Entry)] = &[
    (
        "enable",
        Entry::Doc(
            "Enables a mode, e.g. `enable lazy;`. Modes that can be enabled are
- `unicode` (enabled by default)
- `lazy` (disabled by default)",
        ),
    ),
    (
        "disable",
        Entry::Doc(
            "Disables a mode, e.g. `disable unicode;`. Modes that can be disabled are
- `unicode` (enabled by default)
- `lazy` (disabled by default)",
        ),
    ),
];

const EXPR_KEYWORDS: &[(&str, Entry)] = &[
    (
        "lazy",
        Entry::Doc(
            "Makes the previous repetition lazy. Opposite of `greedy`.

### Example:
~~~pomsky
['test']? lazy
~~~",
        ),
    ),
    (
        "greedy",
        Entry::Doc(
            "Makes the previous repetition greedy. Opposite of `lazy`. \
Only needed when `lazy` mode is enabled.

### Example:
~~~pomsky
enable lazy;
['test']? greedy
~~~",
        ),
    ),
];

const SET_SNIPPETS: &[(&str, Entry)] = &[(
    "range",
    Entry::Snippet {
        snippet: "'${1:A}'-'${2:Z}'",
        doc: "Matches a code point in the given range.

### Example:
~~~pomsky
['0'-'7']
~~~",
    },
)];

const CHARACTERS: &[(&str, Entry)] = &[
    ("n", Entry::Doc("The _newline_ character `\\n`")),
    ("r", Entry::Doc("The _carriage return_ character `\\r`")),
    ("f", Entry::Doc("The _form feed_ character `\\f`")),
    ("a", Entry::Doc("The _alert_ or _bell_ character `\\a`")),
    ("e", Entry::Doc("The _escape_ character `\\e`")),
];

const CHAR_CLASSES: &[(&str, Entry)] = &[
    ("word", Entry::Doc("The _word_ character class, matching letters, digits and the underscore.")),
    ("digit", Entry::Doc("The _digit_ character class")),
    ("space", Entry::Doc("The _space_ character class, matching all whitespace")),
    (
        "horiz_space",
        Entry::Doc("The _horiz_space_ character class, matching the tab and all space separators."),
    ),
    (
        "vert_space",
        Entry::Doc("The _vert_space_ character class, matching all line break characters."),
    ),
    ("w", Entry::Alias("word")),
    ("d", Entry::Alias("digit")),
    ("s", Entry::Alias("space")),
    ("h", Entry::Alias("horiz_space")),
    ("v", Entry::Alias("vert_space")),
    ("ascii", Entry::Doc("The _ascii_ character class, matching U+00 to U+7F.")),
    ("ascii_alpha", Entry::Doc("The _ascii_alpha_ character class (a-z, A-Z).")),
    ("ascii_alnum", Entry::Doc("The _ascii_alnum_ character class (a-z, A-Z, 0-9).")),
    ("ascii_blank", Entry::Doc("The _ascii_blank_ character class, the space and the tab.")),
    ("ascii_cntrl", Entry::Doc("The _ascii_cntrl_ character class (U+00-U+1F, U+7F).")),
    ("ascii_digit", Entry::Doc("The _ascii_digit_ character class (0-9).")),
    ("ascii_graph", Entry::Doc("The _ascii_graph_ character class (U+21-U+7E).")),
    ("ascii_lower", Entry::Doc("The _ascii_lower_ character class (a-z).")),
    ("ascii_print", Entry::Doc("The _ascii_print_ character class (U+20-U+7E).")),
    ("ascii_punct", Entry::Doc("The _ascii_punct_ character class, ASCII punctuation and symbols.")),
    ("ascii_space", Entry::Doc("The _ascii_space_ character class (` \\t\\r\\n\\v\\f`).")),
    ("ascii_upper", Entry::Doc("The _ascii_upper_ character class (A-Z).")),
    ("ascii_word", Entry::Doc("The _ascii_word_ character class (a-z, A-Z, 0-9, _).")),
    ("ascii_xdigit", Entry::Doc("The _ascii_xdigit_ character class (a-f, A-F, 0-9).")),
];
