// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo check` — parse and semantically check a source file.

use camino::Utf8Path;
use miette::Result;
use rayo_core::analyse;
use rayo_core::source_analysis::{Diagnostic, lex_with_eof, parse};
use tracing::{debug, instrument};

use crate::diagnostic::report_all;

/// Check a source file: parse errors are fatal; analyser findings (unused
/// variables, unsafe optional access, incomplete returns) are advisory and
/// leave the exit status at zero.
#[instrument(skip_all, fields(file = %file))]
pub fn check(file: &Utf8Path) -> Result<()> {
    let source = super::read_source(file)?;
    let (module, parse_diagnostics) = parse(lex_with_eof(&source));

    report_all(&parse_diagnostics, file.as_str(), &source);
    let errors = parse_diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        miette::bail!("{errors} parse error(s) in '{file}'");
    }

    let mut findings: Vec<Diagnostic> = Vec::new();
    analyse::check(&module, &mut findings);
    debug!(findings = findings.len(), "semantic check complete");
    report_all(&findings, file.as_str(), &source);

    if findings.is_empty() {
        println!("{file}: ok");
    } else {
        println!("{file}: {} warning(s)", findings.len());
    }
    Ok(())
}
