//! Logos-based lexer for Pomsky
//!
//! Produces a span-indexed token stream. Whitespace and `#` comments are
//! dropped, malformed input becomes [`LexError`] tokens inline, and the scan
//! never stops early: every byte of the input is either covered by a token or
//! part of a skipped trivia run.

use logos::Logos;

use crate::base::{TextRange, TextSize};

/// Lexical error embedded in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A string literal without its closing quote; it extends to the end of input.
    UnclosedString,
    /// `U+` not followed by a hexadecimal digit.
    MissingCodePointNumber,
    /// A character that starts no token.
    Unknown,
}

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Start assertion `^`
    Caret,
    /// End assertion `$`
    Dollar,
    /// Lookahead `>>`
    LookAhead,
    /// Lookbehind `<<`
    LookBehind,
    /// Backreference `::`
    Backref,
    /// Start of word `<`
    AngleLeft,
    /// End of word `>`
    AngleRight,
    /// Word boundary `%`
    BWord,
    /// Zero or more repetition `*`
    Star,
    /// One or more repetition `+`
    Plus,
    /// Zero or one repetition `?`
    QuestionMark,
    /// Alternation `|`
    Pipe,
    /// Capturing group marker `:`
    Colon,
    /// Group start `(`
    OpenParen,
    /// Group end `)`
    CloseParen,
    /// Repetition start `{`
    OpenBrace,
    /// Repetition end `}`
    CloseBrace,
    /// Repetition separator `,`
    Comma,
    /// Negation `!`
    Not,
    /// Character set start `[`
    OpenBracket,
    /// Character range `-`
    Dash,
    /// Character set end `]`
    CloseBracket,
    /// Any code point except line breaks `.`
    Dot,
    /// Statement end `;`
    Semicolon,
    /// Variable assignment `=`
    Equals,
    /// `'...'` or `"..."`
    String,
    /// `U+1F60A`
    CodePoint,
    /// `12345`
    Number,
    /// Variable, group name or keyword
    Identifier,
    /// Malformed input
    Error(LexError),
}

impl TokenKind {
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

/// A token with its kind and byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    #[inline]
    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    #[inline]
    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    /// The source text covered by this token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    /// Second half of a split `U+` prefix.
    pending: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            pending: None,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        loop {
            let logos_token = self.inner.next()?;
            let span = self.inner.span();
            let start = TextSize::new(span.start as u32);
            let end = TextSize::new(span.end as u32);

            let kind = match logos_token {
                Ok(LogosToken::Whitespace | LogosToken::Comment) => continue,
                Ok(LogosToken::CodePointPrefix) => {
                    // Only the `U` is erroneous; the `+` lexes on its own.
                    let split = start + TextSize::new(1);
                    self.pending = Some(Token::new(TokenKind::Plus, TextRange::new(split, end)));
                    return Some(Token::new(
                        TokenKind::Error(LexError::MissingCodePointNumber),
                        TextRange::new(start, split),
                    ));
                }
                Ok(t) => t.into(),
                Err(()) => TokenKind::Error(LexError::Unknown),
            };

            return Some(Token::new(kind, TextRange::new(start, end)));
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    Comment,

    // =========================================================================
    // TWO-CHARACTER SIGILS (must win over their single-char prefixes)
    // =========================================================================
    #[token(">>")]
    LookAhead,
    #[token("<<")]
    LookBehind,
    #[token("::")]
    Backref,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("<")]
    AngleLeft,
    #[token(">")]
    AngleRight,
    #[token("$")]
    Dollar,
    #[token("^")]
    Caret,
    #[token("%")]
    BWord,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    QuestionMark,
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token("!")]
    Not,
    #[token("[")]
    OpenBracket,
    #[token("-")]
    Dash,
    #[token("]")]
    CloseBracket,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[regex(r"'[^']*")]
    UnclosedSingleQuoted,

    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    DoubleQuoted,

    #[regex(r#""([^"\\]|\\[\s\S])*\\?"#)]
    UnclosedDoubleQuoted,

    #[regex(r"U\+[0-9a-fA-F]+")]
    CodePoint,

    #[token("U+")]
    CodePointPrefix,

    #[regex(r"[0-9][\p{L}\p{M}\p{Nd}_]*", priority = 3)]
    Number,

    #[regex(r"[\p{L}_][\p{L}\p{M}\p{Nd}_]*", priority = 3)]
    Identifier,

    // Fallback: any other single character
    #[regex(r"[^\s]", priority = 0)]
    Unknown,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            LookAhead => TokenKind::LookAhead,
            LookBehind => TokenKind::LookBehind,
            Backref => TokenKind::Backref,
            AngleLeft => TokenKind::AngleLeft,
            AngleRight => TokenKind::AngleRight,

            Dollar => TokenKind::Dollar,
            Caret => TokenKind::Caret,
            BWord => TokenKind::BWord,
            Star => TokenKind::Star,
            Plus => TokenKind::Plus,
            QuestionMark => TokenKind::QuestionMark,
            Pipe => TokenKind::Pipe,
            Colon => TokenKind::Colon,
            OpenParen => TokenKind::OpenParen,
            CloseParen => TokenKind::CloseParen,
            OpenBrace => TokenKind::OpenBrace,
            CloseBrace => TokenKind::CloseBrace,
            Comma => TokenKind::Comma,
            Not => TokenKind::Not,
            OpenBracket => TokenKind::OpenBracket,
            Dash => TokenKind::Dash,
            CloseBracket => TokenKind::CloseBracket,
            Dot => TokenKind::Dot,
            Semicolon => TokenKind::Semicolon,
            Equals => TokenKind::Equals,

            SingleQuoted | DoubleQuoted => TokenKind::String,
            UnclosedSingleQuoted | UnclosedDoubleQuoted => {
                TokenKind::Error(LexError::UnclosedString)
            }
            CodePoint => TokenKind::CodePoint,
            Number => TokenKind::Number,
            Identifier => TokenKind::Identifier,
            Unknown => TokenKind::Error(LexError::Unknown),

            // Filtered or split by the Lexer before conversion
            Whitespace | Comment => TokenKind::Error(LexError::Unknown),
            CodePointPrefix => TokenKind::Error(LexError::MissingCodePointNumber),
        }
    }
}
