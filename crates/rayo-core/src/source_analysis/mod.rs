// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source analysis: lexing, parsing, and diagnostics.
//!
//! This module turns raw source text into tokens and tokens into an AST:
//!
//! - [`Lexer`] produces a lossless token stream (every source byte belongs
//!   to exactly one token).
//! - [`parse`] builds a [`Module`](crate::ast::Module) with error recovery;
//!   all failures accumulate as [`Diagnostic`]s, nothing is thrown.
//!
//! ```
//! use rayo_core::source_analysis::{lex_with_eof, parse};
//!
//! let (module, diagnostics) = parse(lex_with_eof("var x = 42"));
//! assert!(diagnostics.is_empty());
//! assert_eq!(module.body.len(), 1);
//! ```

mod diagnostic;
mod lexer;
mod parser;
mod span;
mod token;


pub use diagnostic::{Diagnostic, Severity};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::parse;
pub use span::{SourcePos, Span};
pub use token::{KEYWORDS, Token, TokenKind, is_keyword};
