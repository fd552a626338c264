//! Hover information implementation.
//!
//! Hover is token-only. The token looked up is the one right of the cursor,
//! so hovering the first character of `<<` describes `<<`.

use std::fmt::Write as _;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::base::{TextRange, TextSize, slice};
use crate::parser::{Token, TokenKind, find_closest_token_index, is_reserved};

const DOCS: &str = "https://pomsky-lang.org/docs/reference/constructs";

/// Characters rendered as a heading only when visible.
static INVISIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{C}\p{Z}]").expect("invisible class is a valid regex"));

/// Hover information for a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// Markdown content.
    pub contents: Arc<str>,
    /// The hovered token.
    pub range: TextRange,
}

impl HoverResult {
    pub fn new(contents: impl Into<Arc<str>>, range: TextRange) -> Self {
        Self {
            contents: contents.into(),
            range,
        }
    }
}

/// Get hover information at `offset`.
pub fn hover(text: &str, tokens: &[Token], offset: TextSize) -> Option<HoverResult> {
    let offset = offset + TextSize::new(1);
    let token = tokens.get(find_closest_token_index(tokens, offset))?;

    if offset < token.start() || offset > token.end() {
        return None;
    }

    let content = slice(text, token.range)?;
    let contents = match token.kind {
        TokenKind::CodePoint => code_point_tooltip(content)?,
        TokenKind::Identifier if is_reserved(content) => keyword_tooltip(content)?.to_string(),
        TokenKind::Identifier => ident_tooltip(content)?.to_string(),
        kind => sigil_tooltip(kind)?,
    };

    Some(HoverResult::new(contents, token.range))
}

fn sigil_tooltip(kind: TokenKind) -> Option<String> {
    let (summary, page) = match kind {
        TokenKind::BWord => ("`%`, a word boundary.", "boundary/"),
        TokenKind::Caret => ("`^`, a start of string assertion.", "boundary/"),
        TokenKind::Dollar => ("`$`, an end of string assertion.", "boundary/"),
        TokenKind::AngleLeft => ("`<`, a start of word assertion.", "boundary/"),
        TokenKind::AngleRight => ("`>`, an end of word assertion.", "boundary/"),
        TokenKind::Backref => ("`::n`, a backreference or forward reference.", "reference/"),
        TokenKind::Not => (
            "`!`, a negation.
~~~pomsky
!%       # negated word boundary
!['a']   # negated character set
!<< 'a'  # negative lookbehind
~~~",
            "negation/",
        ),
        TokenKind::Colon => ("Capturing group.", "group/#capturing-groups"),
        TokenKind::Dot => ("`.`, matching all codepoints except line breaks.", "dot/"),
        TokenKind::LookAhead => ("`>>`, a lookahead assertion.", "lookaround/"),
        TokenKind::LookBehind => ("`<<`, a lookbehind assertion.", "lookaround/"),
        TokenKind::Pipe => ("`|`, an alternation.", "alternation/"),
        TokenKind::OpenBracket | TokenKind::CloseBracket => {
            ("`[···]`, a character set.", "charset/")
        }
        TokenKind::OpenBrace | TokenKind::CloseBrace => ("`{a,b}`, a repetition.", "repetition/"),
        TokenKind::Star => (
            "`*`, repeats the last expression zero times or more.",
            "repetition/",
        ),
        TokenKind::Plus => ("`+`, repeats the last expression once or more.", "repetition/"),
        TokenKind::QuestionMark => ("`?`, makes the last expression optional.", "repetition/"),
        _ => return None,
    };

    Some(format!("{summary}\n\n[Documentation]({DOCS}/{page})"))
}

fn ident_tooltip(ident: &str) -> Option<&'static str> {
    Some(match ident {
        "Start" => {
            "Start of string assertion; alias for `^`.\n\n\
[Documentation](https://pomsky-lang.org/docs/reference/constructs/boundary/)"
        }
        "End" => {
            "End of string assertion; alias for `$`.\n\n\
[Documentation](https://pomsky-lang.org/docs/reference/constructs/boundary/)"
        }
        "C" | "Codepoint" => {
            "An arbitrary codepoint. Can be written as `Codepoint` or abbreviated as `C`."
        }
        "G" | "Grapheme" => {
            "An arbitrary [grapheme](https://pomsky-lang.org/docs/reference/constructs/variables/#built-in-variables),
which may consist of multiple codepoints. Can be written as `Grapheme` or abbreviated as `G`."
        }
        _ => return None,
    })
}

fn keyword_tooltip(keyword: &str) -> Option<&'static str> {
    Some(match keyword {
        "let" => {
            "Declares a [variable](https://pomsky-lang.org/docs/reference/constructs/variables/).
Syntax:
~~~pomsky
let name = \"expression\";
name
~~~"
        }
        "range" => {
            "A [number range](https://pomsky-lang.org/docs/reference/constructs/number-range/),
which can match multi-digit numbers of any base. Syntax:
~~~pomsky
# match decimal numbers between 0 and 255
range '0'-'255'

# match hexadecimal numbers between 15 and FFF
range '15'-'FFF' base 16
~~~"
        }
        "atomic" => {
            "An [atomic group](https://pomsky-lang.org/docs/reference/constructs/group/#atomic-groups).
Syntax:
~~~pomsky
atomic('group content')
~~~"
        }
        "regex" => {
            "An [inline regular expression](https://pomsky-lang.org/docs/reference/constructs/inline-regex/).
Syntax:
~~~pomsky
regex '...'
~~~"
        }
        "lazy" => {
            "Makes the previous repetition [lazy](https://pomsky-lang.org/docs/language-tour/modifiers/#lazy-mode),
so it will match as few times as possible.
Syntax:
~~~pomsky
'...'* lazy
~~~"
        }
        "greedy" => {
            "Makes the previous repetition greedy, so it will match as many times as possible.
Greedy is the default, so this is only needed in
[lazy mode](https://pomsky-lang.org/docs/language-tour/modifiers/#lazy-mode).
Syntax:
~~~pomsky
'...'* greedy
~~~"
        }
        "test" => {
            "Contains [unit tests](https://pomsky-lang.org/docs/reference/constructs/tests/). Syntax:
~~~pomsky
test {
  match 'foo';
  reject 'bar';
}
~~~"
        }
        "recursion" => {
            "[Recursion](https://pomsky-lang.org/docs/reference/constructs/recursion/) matches the entire regex recursively.
Syntax:
~~~pomsky
# matches a balanced set of parentheses
'(' recursion* ')'
~~~
This is only supported in the PCRE and Ruby regex flavors."
        }
        "U" | "if" | "else" => "This keyword is reserved and can't be used as a variable name!",
        _ => return None,
    })
}

/// Describe a `U+XXXX` literal: the character, its number in several bases,
/// and its UTF-16 encoding.
fn code_point_tooltip(literal: &str) -> Option<String> {
    let hex = literal.strip_prefix("U+")?;
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let ch = char::from_u32(value)?;

    let mut display = [0u8; 4];
    let display = ch.encode_utf8(&mut display);

    let mut contents = String::new();
    if !INVISIBLE.is_match(display) {
        let _ = writeln!(contents, "## {display}");
    }

    let mut units = [0u16; 2];
    let utf16 = ch
        .encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("{unit:04X}"))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = write!(
        contents,
        "Code point `U+{value:04X}`\n\n- dec: {value}\n- oct: {value:o}\n- UTF-16: `{utf16}`"
    );
    Some(contents)
}
