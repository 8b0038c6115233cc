// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token-stream formatting.
//!
//! The formatter consumes the lexer's raw token stream, never the AST, so it
//! works on any input the lexer accepts — including source the parser would
//! reject. It renders canonical single-space separation: commas and colons
//! bind to the token before them, everything else is token-plus-space.
//!
//! Formatting is idempotent: formatting already-formatted output reproduces
//! it exactly, because the output's token texts are unchanged and the
//! spacing rules depend only on token kinds.


use crate::source_analysis::{Token, TokenKind};

/// Renders a token stream with canonical spacing.
///
/// Whitespace, comment, and end-of-input tokens are dropped; everything else
/// is rendered from its text alone.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.kind.is_trivia() || token.kind == TokenKind::Eof {
            continue;
        }
        match token.kind {
            TokenKind::Comma => {
                trim_trailing_space(&mut out);
                out.push_str(", ");
            }
            TokenKind::Colon => {
                trim_trailing_space(&mut out);
                out.push_str(": ");
            }
            _ => {
                out.push_str(&token.text);
                out.push(' ');
            }
        }
    }
    trim_trailing_space(&mut out);
    out
}

fn trim_trailing_space(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::lex_with_eof;

    fn format(source: &str) -> String {
        format_tokens(&lex_with_eof(source))
    }

    #[test]
    fn collapses_spacing() {
        assert_eq!(format("var   x=1"), "var x = 1");
    }

    #[test]
    fn commas_and_colons_bind_left() {
        assert_eq!(format("f(a ,b)"), "f ( a, b )");
        assert_eq!(format("{'k' : 1}"), "{ 'k': 1 }");
    }

    #[test]
    fn drops_comments_and_newlines() {
        assert_eq!(format("var x = 1 # note\nx = 2"), "var x = 1 x = 2");
    }

    #[test]
    fn empty_input_formats_to_empty() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let samples = [
            "var x=1",
            "def f ( a,b ) { return a+b }",
            "if x<2 { print( 'hi' ) } else { x=3 }",
            "{ 'a' :1, 'b':2 }",
        ];
        for source in samples {
            let once = format(source);
            let twice = format(&once);
            assert_eq!(once, twice, "not idempotent for {source:?}");
        }
    }
}
