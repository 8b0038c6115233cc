// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Rayo lexical analysis.
//!
//! Tokens are lossless: every byte of the source belongs to exactly one token
//! (whitespace, comments, and invalid characters included), so concatenating
//! the `text` of every token reconstructs the source exactly. This property
//! is what makes the token-stream formatter possible without an AST.

use ecow::EcoString;

use super::{SourcePos, Span};

/// The kind of token, not including source location or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier: `foo`, `my_var`
    Identifier,
    /// A reserved word: `if`, `def`, `return`, ...
    Keyword,
    /// A decimal integer literal: `42`
    Number,
    /// A quoted string: `'hello'` or `"hello"` (quotes included in text)
    Str,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// A run of operator characters: `+`, `==`, `!=`, ...
    Operator,
    /// A line comment: `# ...` (to end of line, newline excluded)
    Comment,
    /// A whitespace run, or a single newline
    Whitespace,
    /// A byte the lexer does not recognize
    Error,
    /// End of input
    Eof,
}

impl TokenKind {
    /// A human-readable description used in "expected ..." diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Str => "string",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::Operator => "operator",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns true for tokens the parser skips between meaningful tokens.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// The fixed keyword set of the language.
///
/// Any other letter- or underscore-led run lexes as an identifier.
pub const KEYWORDS: &[&str] = &[
    "if", "elif", "else", "while", "for", "in", "def", "return", "try", "except", "finally",
    "import", "var", "None", "true", "false",
];

/// Returns true if `word` is a reserved keyword.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The raw source text of the token.
    pub text: EcoString,
    /// Position of the token's first byte.
    pub pos: SourcePos,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<EcoString>, pos: SourcePos) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// The position one past the last byte of this token.
    ///
    /// Computed by walking the token text, so tokens that span newlines
    /// (multi-line strings) report correct end lines and columns.
    #[must_use]
    pub fn end_pos(&self) -> SourcePos {
        let mut line = self.pos.line;
        let mut column = self.pos.column;
        for c in self.text.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "source files over 4GB are not supported"
        )]
        let offset = self.pos.offset + self.text.len() as u32;
        SourcePos::new(offset, line, column)
    }

    /// The source span covered by this token.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end_pos())
    }

    /// Returns true if this token is a specific keyword.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }

    /// Returns true if this token is a specific operator.
    #[must_use]
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}
