// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Rayo source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written for maximum control over error recovery.
//!
//! # Design Principles
//!
//! - **Lexing never fails**: unrecognized input becomes [`TokenKind::Error`]
//!   tokens; error policy belongs to the parser.
//! - **Lossless**: every byte of input ends up in exactly one token, so the
//!   concatenated token texts reconstruct the source exactly.
//! - **Monotonic cursor**: the (offset, line, column) cursor only ever
//!   advances, guaranteeing termination.
//!
//! # Example
//!
//! ```
//! use rayo_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Whitespace,
//!         TokenKind::Operator,
//!         TokenKind::Whitespace,
//!         TokenKind::Number,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use super::{SourcePos, Token, TokenKind, is_keyword};

/// Characters that can start or continue a multi-character operator.
const OPERATOR_CHARS: &str = "+-*/%=<>!&";

/// A lexer that tokenizes Rayo source code.
///
/// Call [`Lexer::next_token`] repeatedly until it returns a [`TokenKind::Eof`]
/// token, or consume the lexer as an [`Iterator`] (which yields the EOF token
/// last and then stops).
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Current 1-based line.
    line: u32,
    /// Current 1-based column.
    column: u32,
    /// Set once the EOF token has been produced (ends iteration).
    finished: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character, updating the line/column cursor.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// The current cursor as a [`SourcePos`].
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_pos(&self) -> SourcePos {
        SourcePos::new(self.position as u32, self.line, self.column)
    }

    /// Builds a token from `start` to the current cursor.
    fn token_from(&self, kind: TokenKind, start: SourcePos) -> Token {
        let text = &self.source[start.offset as usize..self.position];
        Token::new(kind, text, start)
    }

    /// Produces the next token. Returns an EOF token at end of input and on
    /// every call thereafter.
    pub fn next_token(&mut self) -> Token {
        let start = self.current_pos();

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, "", start);
        };

        match c {
            ' ' | '\t' | '\r' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\r'));
                self.token_from(TokenKind::Whitespace, start)
            }
            // Newlines are their own whitespace token so the formatter and
            // parser can see statement boundaries.
            '\n' => {
                self.advance();
                self.token_from(TokenKind::Whitespace, start)
            }
            '#' => {
                self.advance_while(|c| c != '\n');
                self.token_from(TokenKind::Comment, start)
            }
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '[' => self.single(TokenKind::LBracket, start),
            ']' => self.single(TokenKind::RBracket, start),
            ',' => self.single(TokenKind::Comma, start),
            ':' => self.single(TokenKind::Colon, start),
            '.' => self.single(TokenKind::Dot, start),
            '\'' | '"' => self.lex_string(start, c),
            c if c.is_ascii_digit() => {
                self.advance_while(|c| c.is_ascii_digit());
                self.token_from(TokenKind::Number, start)
            }
            c if c.is_alphabetic() || c == '_' => {
                self.advance_while(|c| c.is_alphanumeric() || c == '_');
                let text = &self.source[start.offset as usize..self.position];
                let kind = if is_keyword(text) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                Token::new(kind, text, start)
            }
            c if OPERATOR_CHARS.contains(c) => {
                // Greedy: a run of operator characters is one token.
                self.advance_while(|c| OPERATOR_CHARS.contains(c));
                self.token_from(TokenKind::Operator, start)
            }
            _ => {
                // Unknown character: error token, keep going.
                self.advance();
                self.token_from(TokenKind::Error, start)
            }
        }
    }

    /// Consumes one character and builds a single-character token.
    fn single(&mut self, kind: TokenKind, start: SourcePos) -> Token {
        self.advance();
        self.token_from(kind, start)
    }

    /// Lexes a quoted string. Strings may span newlines; an unterminated
    /// string consumes to end of input (the parser sees a string token whose
    /// text lacks the closing quote).
    fn lex_string(&mut self, start: SourcePos, quote: char) -> Token {
        self.advance(); // opening quote
        self.advance_while(|c| c != quote);
        if self.peek_char() == Some(quote) {
            self.advance(); // closing quote
        }
        self.token_from(TokenKind::Str, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

/// Tokenizes source text, excluding the trailing EOF token.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Lexer::new(source).collect();
    tokens.pop(); // EOF
    tokens
}

/// Tokenizes source text, including the trailing EOF token.
///
/// This is the form the parser consumes.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    fn reconstruct(source: &str) -> String {
        lex_with_eof(source).iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        let tokens = lex_with_eof("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].pos, SourcePos::new(0, 1, 1));
    }

    #[test]
    fn keywords_and_identifiers() {
        let tokens = lex("def foo");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "def");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].text, "foo");
    }

    #[test]
    fn punctuation_kinds() {
        assert_eq!(
            kinds("{}()[],:."),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Dot,
            ]
        );
    }

    #[test]
    fn whitespace_run_is_one_token_but_newline_is_separate() {
        let tokens = lex("a \t\r\nb");
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].text, " \t\r");
        assert_eq!(tokens[2].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].text, "\n");
        assert_eq!(tokens[3].pos.line, 2);
        assert_eq!(tokens[3].pos.column, 1);
    }

    #[test]
    fn line_comment_stops_before_newline() {
        let tokens = lex("# hello\nx");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "# hello");
        assert_eq!(tokens[1].text, "\n");
    }

    #[test]
    fn operators_are_greedy() {
        let tokens = lex("a == b");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "==");

        // A greedy run: `!=` followed directly by `=` lexes as one token.
        let tokens = lex("!==");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "!==");
    }

    #[test]
    fn string_with_embedded_newline_tracks_lines() {
        let tokens = lex("'a\nb' x");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "'a\nb'");
        // `x` is on line 2.
        assert_eq!(tokens[2].pos.line, 2);
        assert_eq!(tokens[2].pos.column, 4);
    }

    #[test]
    fn unterminated_string_consumes_to_eof() {
        let tokens = lex_with_eof("'never ends");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "'never ends");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn unknown_byte_becomes_error_token() {
        let tokens = lex("a @ b");
        assert_eq!(tokens[2].kind, TokenKind::Error);
        assert_eq!(tokens[2].text, "@");
        // The stream continues past the error.
        assert_eq!(tokens[4].text, "b");
    }

    #[test]
    fn eof_repeats_after_end() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn lossless_reconstruction_samples() {
        for source in [
            "",
            "var x = 42\nreturn x",
            "def f() { print('hi') }\n",
            "a.b(c)[d] == 'str' # trailing\n\t weird @ bytes \u{e9}\u{4e16}",
            "'unterminated\nstring",
        ] {
            assert_eq!(reconstruct(source), source);
        }
    }
}
