// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo lex` — print the token stream of a source file.

use camino::Utf8Path;
use miette::Result;
use rayo_core::source_analysis::{Token, lex_with_eof};
use tracing::instrument;

/// Lex a source file and print one line per token: position, kind, text.
/// Every token is printed, whitespace included, so the output covers the
/// lexer's full partition of the source.
#[instrument(skip_all, fields(file = %file))]
pub fn lex(file: &Utf8Path) -> Result<()> {
    let source = super::read_source(file)?;

    for token in lex_with_eof(&source) {
        println!("{}", render_token(&token));
    }
    Ok(())
}

/// One output line for a token. The text is debug-quoted so whitespace and
/// newline tokens stay on a single line.
fn render_token(token: &Token) -> String {
    format!(
        "{:>4}:{:<4} {:<12} {:?}",
        token.pos.line,
        token.pos.column,
        token.kind.description(),
        token.text.as_str()
    )
}
