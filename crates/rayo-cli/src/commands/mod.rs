// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

pub mod check;
pub mod lex;
pub mod parse;
pub mod run;
pub mod test;
pub mod transpile;

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};

/// Reads a source file, with a path-bearing error on failure.
pub(crate) fn read_source(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read '{path}'"))
}
