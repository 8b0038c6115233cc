// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo parse` — parse a source file and print an AST summary.

use camino::Utf8Path;
use miette::Result;
use rayo_core::source_analysis::{lex_with_eof, parse as parse_module};
use tracing::{debug, instrument};

use crate::diagnostic::report_all;

/// Parse a source file, print a module summary, and render any parse
/// diagnostics. Exits non-zero if any diagnostic is an error; a best-effort
/// AST summary is still printed first.
#[instrument(skip_all, fields(file = %file))]
pub fn parse(file: &Utf8Path) -> Result<()> {
    let source = super::read_source(file)?;
    let (module, diagnostics) = parse_module(lex_with_eof(&source));
    debug!(
        imports = module.imports.len(),
        statements = module.body.len(),
        diagnostics = diagnostics.len(),
        "parsed module"
    );

    println!("module {}", file.file_stem().unwrap_or("?"));
    for import in &module.imports {
        println!("  import '{}'", import.path);
    }
    for stmt in &module.body {
        println!("  {stmt:?}");
    }

    report_all(&diagnostics, file.as_str(), &source);

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        miette::bail!("{errors} parse error(s) in '{file}'");
    }
    Ok(())
}
