//! A small parser for the subset of Pomsky used in tests.
//!
//! Builds rule trees from real source text so that IDE features can be
//! tested end to end. Supports `let`/`enable`/`disable` statements, strings,
//! code points, character sets (opaque), groups, alternation, repetition,
//! lookaround, negation, boundaries, references and variables.

use pomsky_ide::base::{TextRange, TextSize};
use pomsky_ide::parser::{Token, TokenKind, tokenize};
use pomsky_ide::syntax::{
    BoundaryKind, Capture, GroupKind, LookaroundKind, ParseError, ReferenceTarget, Rule,
    RuleOrErrors, Stmt,
};

/// Parse `source`, reporting the first syntax error.
pub fn parse(source: &str) -> RuleOrErrors {
    let mut parser = Parser {
        source,
        tokens: tokenize(source),
        pos: 0,
    };
    let rule = parser.file().map_err(|error| vec![error])?;
    if let Some(token) = parser.peek() {
        return Err(vec![ParseError::new("unexpected token", token.range)]);
    }
    Ok(rule)
}

/// Parse `source`, panicking on syntax errors.
pub fn parse_ok(source: &str) -> Rule {
    match parse(source) {
        Ok(rule) => rule,
        Err(errors) => panic!("parse errors in {source:?}: {errors:?}"),
    }
}

type ParseResult<T> = Result<T, ParseError>;

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn peek_nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|token| token.kind)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| {
            token.kind == TokenKind::Identifier && token.text(self.source) == keyword
        })
    }

    fn offset(&self) -> TextSize {
        self.peek()
            .map(|token| token.start())
            .unwrap_or_else(|| TextSize::of(self.source))
    }

    fn error(&self, message: &str) -> ParseError {
        let range = self
            .peek()
            .map(|token| token.range)
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.source)));
        ParseError::new(message, range)
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        (self.peek_kind() == Some(kind)).then(|| self.bump())
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        self.eat(kind).ok_or_else(|| self.error(message))
    }

    /// Statements followed by an expression.
    fn file(&mut self) -> ParseResult<Rule> {
        if self.at_keyword("let") {
            let start = self.bump().start();
            let name = self.expect(TokenKind::Identifier, "expected variable name")?;
            self.expect(TokenKind::Equals, "expected `=`")?;
            let rhs = self.alternation()?;
            self.expect(TokenKind::Semicolon, "expected `;`")?;
            let rest = self.file()?;
            let span = TextRange::new(start, rest.span().end());
            return Ok(Rule::let_in(
                name.text(self.source),
                name.range,
                rhs,
                rest,
                span,
            ));
        }

        if self.at_keyword("enable") || self.at_keyword("disable") {
            let keyword = self.bump();
            let setting = self.expect(TokenKind::Identifier, "expected setting")?;
            let semicolon = self.expect(TokenKind::Semicolon, "expected `;`")?;
            let stmt_span = TextRange::new(keyword.start(), semicolon.end());
            let setting = setting.text(self.source).into();
            let stmt = if keyword.text(self.source) == "enable" {
                Stmt::Enable {
                    setting,
                    span: stmt_span,
                }
            } else {
                Stmt::Disable {
                    setting,
                    span: stmt_span,
                }
            };
            let rest = self.file()?;
            let span = TextRange::new(keyword.start(), rest.span().end());
            return Ok(Rule::stmt_expr(stmt, rest, span));
        }

        self.alternation()
    }

    fn alternation(&mut self) -> ParseResult<Rule> {
        self.eat(TokenKind::Pipe);
        let mut alternatives = vec![self.sequence()?];
        while self.eat(TokenKind::Pipe).is_some() {
            alternatives.push(self.sequence()?);
        }

        if alternatives.len() == 1 {
            return Ok(alternatives.remove(0));
        }
        let span = TextRange::new(
            alternatives[0].span().start(),
            alternatives[alternatives.len() - 1].span().end(),
        );
        Ok(Rule::alternation(alternatives, span))
    }

    fn sequence(&mut self) -> ParseResult<Rule> {
        let start = self.offset();
        let mut parts = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if matches!(
                kind,
                TokenKind::Pipe | TokenKind::CloseParen | TokenKind::Semicolon
            ) {
                break;
            }
            parts.push(self.fixes()?);
        }

        match parts.len() {
            0 => Ok(Rule::group(
                GroupKind::Implicit,
                Vec::new(),
                TextRange::empty(start),
            )),
            1 => Ok(parts.remove(0)),
            _ => {
                let span = TextRange::new(start, parts[parts.len() - 1].span().end());
                Ok(Rule::group(GroupKind::Implicit, parts, span))
            }
        }
    }

    fn fixes(&mut self) -> ParseResult<Rule> {
        match self.peek_kind() {
            Some(TokenKind::Not) => {
                let start = self.bump().start();
                let inner = self.fixes()?;
                let span = TextRange::new(start, inner.span().end());
                Ok(Rule::negation(inner, span))
            }
            Some(kind @ (TokenKind::LookAhead | TokenKind::LookBehind)) => {
                let start = self.bump().start();
                let inner = self.fixes()?;
                let span = TextRange::new(start, inner.span().end());
                let kind = if kind == TokenKind::LookAhead {
                    LookaroundKind::Ahead
                } else {
                    LookaroundKind::Behind
                };
                Ok(Rule::lookaround(kind, inner, span))
            }
            _ => {
                let mut rule = self.atom()?;
                while let Some((lower, upper, end)) = self.repetition()? {
                    let span = TextRange::new(rule.span().start(), end);
                    rule = Rule::repetition(rule, lower, upper, span);
                    if self.at_keyword("lazy") || self.at_keyword("greedy") {
                        let greedy_token = self.bump();
                        if let Rule::Repetition { greedy, span, .. } = &mut rule {
                            *greedy = greedy_token.text(self.source) == "greedy";
                            *span = TextRange::new(span.start(), greedy_token.end());
                        }
                    }
                }
                Ok(rule)
            }
        }
    }

    fn repetition(&mut self) -> ParseResult<Option<(u32, Option<u32>, TextSize)>> {
        let Some(kind) = self.peek_kind() else {
            return Ok(None);
        };
        let bounds = match kind {
            TokenKind::Star => (0, None),
            TokenKind::Plus => (1, None),
            TokenKind::QuestionMark => (0, Some(1)),
            TokenKind::OpenBrace => {
                self.bump();
                let lower = self.number()?;
                let upper = if self.eat(TokenKind::Comma).is_some() {
                    match self.peek_kind() {
                        Some(TokenKind::Number) => Some(self.number()?),
                        _ => None,
                    }
                } else {
                    Some(lower)
                };
                let close = self.expect(TokenKind::CloseBrace, "expected `}`")?;
                return Ok(Some((lower, upper, close.end())));
            }
            _ => return Ok(None),
        };
        let token = self.bump();
        Ok(Some((bounds.0, bounds.1, token.end())))
    }

    fn number(&mut self) -> ParseResult<u32> {
        let token = self.expect(TokenKind::Number, "expected number")?;
        token
            .text(self.source)
            .parse()
            .map_err(|_| ParseError::new("invalid number", token.range))
    }

    fn atom(&mut self) -> ParseResult<Rule> {
        let Some(token) = self.peek() else {
            return Err(self.error("expected expression"));
        };

        match token.kind {
            TokenKind::String => {
                self.bump();
                let text = token.text(self.source);
                let content = text.get(1..text.len().saturating_sub(1)).unwrap_or("");
                Ok(Rule::literal(content, token.range))
            }
            TokenKind::CodePoint => {
                self.bump();
                let value = u32::from_str_radix(&token.text(self.source)[2..], 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| ParseError::new("invalid code point", token.range))?;
                Ok(Rule::literal(value.to_string(), token.range))
            }
            TokenKind::Dot => {
                self.bump();
                Ok(Rule::Dot { span: token.range })
            }
            TokenKind::Caret => self.boundary(BoundaryKind::Start),
            TokenKind::Dollar => self.boundary(BoundaryKind::End),
            TokenKind::BWord => self.boundary(BoundaryKind::Word),
            TokenKind::AngleLeft => self.boundary(BoundaryKind::WordStart),
            TokenKind::AngleRight => self.boundary(BoundaryKind::WordEnd),
            TokenKind::OpenBracket => {
                self.bump();
                while !matches!(self.peek_kind(), Some(TokenKind::CloseBracket) | None) {
                    self.bump();
                }
                let close = self.expect(TokenKind::CloseBracket, "expected `]`")?;
                Ok(Rule::CharClass {
                    negative: false,
                    span: TextRange::new(token.start(), close.end()),
                })
            }
            TokenKind::OpenParen => {
                self.bump();
                self.group_body(GroupKind::Normal, token.start())
            }
            TokenKind::Colon => {
                self.bump();
                let name = self
                    .eat(TokenKind::Identifier)
                    .map(|name| name.text(self.source).into());
                self.expect(TokenKind::OpenParen, "expected `(`")?;
                self.group_body(GroupKind::Capturing(Capture { name }), token.start())
            }
            TokenKind::Backref => {
                self.bump();
                let Some(target) = self.peek() else {
                    return Err(self.error("expected reference target"));
                };
                let reference = match target.kind {
                    TokenKind::Identifier => {
                        ReferenceTarget::Named(target.text(self.source).into())
                    }
                    TokenKind::Number => ReferenceTarget::Number(
                        target
                            .text(self.source)
                            .parse()
                            .map_err(|_| ParseError::new("invalid number", target.range))?,
                    ),
                    _ => return Err(self.error("expected reference target")),
                };
                self.bump();
                Ok(Rule::reference(
                    reference,
                    TextRange::new(token.start(), target.end()),
                ))
            }
            TokenKind::Identifier => {
                let text = token.text(self.source);
                if text == "atomic" && self.peek_nth_kind(1) == Some(TokenKind::OpenParen) {
                    self.bump();
                    self.bump();
                    return self.group_body(GroupKind::Atomic, token.start());
                }
                self.bump();
                let span = token.range;
                Ok(match text {
                    "Start" => Rule::Boundary {
                        kind: BoundaryKind::Start,
                        span,
                    },
                    "End" => Rule::Boundary {
                        kind: BoundaryKind::End,
                        span,
                    },
                    "C" | "Codepoint" => Rule::Codepoint { span },
                    "G" | "Grapheme" => Rule::Grapheme { span },
                    "recursion" => Rule::Recursion { span },
                    _ => Rule::variable(text, span),
                })
            }
            _ => Err(self.error("expected expression")),
        }
    }

    fn boundary(&mut self, kind: BoundaryKind) -> ParseResult<Rule> {
        let token = self.bump();
        Ok(Rule::Boundary {
            kind,
            span: token.range,
        })
    }

    /// Parse the inside of a group whose `(` was consumed.
    fn group_body(&mut self, kind: GroupKind, start: TextSize) -> ParseResult<Rule> {
        let inner = self.file()?;
        let close = self.expect(TokenKind::CloseParen, "expected `)`")?;
        Ok(Rule::group(
            kind,
            vec![inner],
            TextRange::new(start, close.end()),
        ))
    }
}

#[test]
fn test_helper_parses_let_chain() {
    use pomsky_ide::base::span;

    let rule = parse_ok("let a = 'x'; let b = a+; :name(b) | a");
    let Rule::StmtExpr { span: outer, .. } = &rule else {
        panic!("expected a statement, got {rule:?}");
    };
    assert_eq!(*outer, span(0, 37));
}

#[test]
fn test_helper_reports_errors() {
    assert!(parse("let = 'x';").is_err());
    assert!(parse("('a'").is_err());
    assert!(parse("'a')").is_err());
}
