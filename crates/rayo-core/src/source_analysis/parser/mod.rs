// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Rayo source code.
//!
//! The parser builds an AST from the lexer's token stream. It is designed
//! for batch compilation and tooling alike, with comprehensive error
//! recovery and accumulated diagnostics.
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory** — the parser always produces a
//!   [`Module`], however broken the input. Check the returned diagnostics.
//! - **Multiple errors** — report all errors, don't stop at the first.
//! - **Forward progress** — the token cursor strictly advances on every
//!   iteration of the module and block loops, so parsing always terminates.
//!
//! # Grammar
//!
//! Informal precedence, lowest to highest:
//!
//! ```text
//! statement  → comparison
//! comparison → additive (('<' | '>' | '==' | '!=') additive)*   (left-assoc)
//! additive   → unary (('+' | '-') unary)*                       (left-assoc)
//! unary      → ('!' | '-') unary | postfix
//! postfix    → primary (call | index | attribute)*
//! ```
//!
//! Postfix chaining repeats while the next token opens a call `(`, an index
//! `[`, or a member access `.`, so `a.b(c)[d]` parses as
//! `Index(Call(Attribute(a, b), [c]), d)`.
//!
//! # Usage
//!
//! ```
//! use rayo_core::source_analysis::{lex_with_eof, parse};
//!
//! let (module, diagnostics) = parse(lex_with_eof("var x = 42"));
//! assert!(diagnostics.is_empty());
//! assert_eq!(module.body.len(), 1);
//! ```

use ecow::EcoString;

use crate::ast::{Import, Module, Statement};
use crate::source_analysis::{Diagnostic, SourcePos, Span, Token, TokenKind};

mod expressions;
mod statements;


/// Parse a sequence of tokens (as produced by
/// [`lex_with_eof`](crate::source_analysis::lex_with_eof)) into a module.
///
/// This is the main entry point for parsing. It always returns a [`Module`],
/// even if there are syntax errors; check the returned diagnostics.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Module, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module();
    (module, parser.diagnostics)
}

/// The recursive descent parser.
///
/// Holds the token stream, a cursor, and the accumulated diagnostics. The
/// cursor invariant: `current` always points at a non-trivia token (or EOF).
pub(crate) struct Parser {
    /// The tokens being parsed.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
    /// Span of the most recently consumed token (for node span endpoints).
    last_span: Span,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    ///
    /// An empty stream gets a synthesized EOF token so the parser does not
    /// depend on callers going through
    /// [`lex_with_eof`](crate::source_analysis::lex_with_eof).
    fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, "", SourcePos::start_of_file()));
        }
        let mut parser = Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
            last_span: Span::default(),
        };
        parser.skip_trivia();
        parser
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    ///
    /// Falls back to the last token (EOF in well-formed streams) if the
    /// cursor has moved past the end, rather than panicking.
    pub(crate) fn current_token(&self) -> &Token {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .expect("token stream always contains at least EOF")
    }

    /// Returns true if the cursor is at end of input.
    pub(crate) fn at_eof(&self) -> bool {
        self.current_token().kind == TokenKind::Eof
    }

    /// Consumes the current token and skips any trivia after it.
    pub(crate) fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.last_span = self.tokens[self.current].span();
            self.current += 1;
        }
        self.skip_trivia();
    }

    /// Moves the cursor past whitespace and comment tokens.
    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.current)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.current += 1;
        }
    }

    /// Span of the most recently consumed token.
    pub(crate) fn last_span(&self) -> Span {
        self.last_span
    }

    /// Consumes the current token if it has the required kind. Otherwise
    /// records a parse error and leaves the cursor on the token actually
    /// present (no token is invented, nothing is skipped).
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.current_token().kind == kind {
            self.advance();
            true
        } else {
            self.error_at_current("unexpected token", vec![kind.description()]);
            false
        }
    }

    /// Records an error diagnostic at the current token, with the expected
    /// token set and the offending source excerpt.
    pub(crate) fn error_at_current(&mut self, message: &str, expected: Vec<&'static str>) {
        let token = self.current_token();
        let diagnostic = Diagnostic::error(message, token.span())
            .with_expected(expected)
            .with_excerpt(token.text.clone());
        self.diagnostics.push(diagnostic);
    }

    // ========================================================================
    // Module Structure
    // ========================================================================

    /// Parses the whole token stream into a module.
    fn parse_module(&mut self) -> Module {
        let start = self.current_token().span();
        let mut imports = Vec::new();
        let mut body = Vec::new();

        while !self.at_eof() {
            if self.current_token().is_keyword("import") {
                if let Some(import) = self.parse_import() {
                    imports.push(import);
                }
                continue;
            }

            let before = self.current;
            if let Some(statement) = self.parse_statement() {
                body.push(statement);
            }
            // Forward progress: if nothing was consumed, skip one token.
            if self.current == before {
                self.advance();
            }
        }

        let span = start.merge(self.current_token().span());
        Module::new(imports, body, span)
    }

    /// Parses `import 'path'`. The quotes are stripped from the path; paths
    /// ending in the source extension denote local modules for the resolver.
    fn parse_import(&mut self) -> Option<Import> {
        let start = self.current_token().span();
        self.advance(); // `import`

        if self.current_token().kind != TokenKind::Str {
            self.error_at_current("expected import path", vec![TokenKind::Str.description()]);
            return None;
        }
        let path = strip_quotes(&self.current_token().text);
        self.advance();

        Some(Import {
            path,
            span: start.merge(self.last_span()),
        })
    }

    /// Parses `{ statement* }`. Reports a diagnostic for a missing `{` or `}`
    /// but still returns the statements it managed to parse.
    pub(crate) fn parse_block(&mut self) -> Vec<Statement> {
        self.expect(TokenKind::LBrace);
        let mut statements = Vec::new();

        while self.current_token().kind != TokenKind::RBrace && !self.at_eof() {
            let before = self.current;
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            if self.current == before {
                if self.current_token().kind == TokenKind::RBrace {
                    break;
                }
                self.advance();
            }
        }

        self.expect(TokenKind::RBrace);
        statements
    }
}

/// Strips matching single or double quotes from a string token's text.
///
/// Unterminated strings (no closing quote) only lose the opening quote.
pub(crate) fn strip_quotes(text: &str) -> EcoString {
    let mut s = text;
    if let Some(rest) = s.strip_prefix('\'') {
        s = rest.strip_suffix('\'').unwrap_or(rest);
    } else if let Some(rest) = s.strip_prefix('"') {
        s = rest.strip_suffix('"').unwrap_or(rest);
    }
    EcoString::from(s)
}
