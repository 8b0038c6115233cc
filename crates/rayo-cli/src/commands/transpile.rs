// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo transpile` — compile a source file and its local imports to Go.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use rayo_core::resolve::ModuleResolver;
use tracing::{debug, info, instrument};

/// Transpile `file` (and every transitively imported local module) into one
/// Go file. The output path is `--output` when given, otherwise the entry
/// file with its extension replaced by `.go`. Nothing is written when
/// resolution fails.
#[instrument(skip_all, fields(file = %file))]
pub fn transpile(
    file: &Utf8Path,
    include_paths: &[Utf8PathBuf],
    output: Option<&Utf8Path>,
) -> Result<()> {
    let resolver = ModuleResolver::with_include_paths(include_paths.to_vec());
    let unit = resolver.compile(file)?;
    debug!(bytes = unit.len(), "resolved compilation unit");

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => file.with_extension("go"),
    };
    fs::write(&output, unit)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write '{output}'"))?;

    info!(%output, "transpiled");
    println!("Generated {output}");
    Ok(())
}
