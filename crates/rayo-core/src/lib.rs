// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rayo compiler core.
//!
//! This crate contains the core transpiler functionality:
//! - Lexical analysis (lossless tokenization)
//! - Parsing (AST construction with error recovery)
//! - Semantic analysis (unused variables, null safety, control flow)
//! - Code generation (Go output)
//! - Module resolution (multi-file compilation units)
//! - Formatting and lint collaborators
//!
//! Everything is library-first: the CLI in `rayo-cli` is a thin shell over
//! these modules, and every failure mode is a value (diagnostics or
//! `Result`), never a panic.

pub mod analyse;
pub mod ast;
pub mod ast_walker;
pub mod codegen;
pub mod format;
pub mod lint;
pub mod resolve;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Literal, Module, Statement};
    pub use crate::source_analysis::{Diagnostic, Severity, Span};
}
