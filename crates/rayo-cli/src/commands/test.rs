// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo test` — parse-conformance testing over a source tree.
//!
//! Discovers every `.ryo` file under a directory and checks that each parses
//! without errors, reporting pass/fail counts. A future version could diff
//! generated Go against golden files; today the contract is parse
//! conformance only.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use rayo_core::resolve::SOURCE_EXTENSION;
use rayo_core::source_analysis::{lex_with_eof, parse};
use tracing::{debug, instrument};

/// Run parse-conformance tests over every source file under `dir`.
#[instrument(skip_all, fields(dir = %dir))]
pub fn test(dir: &Utf8Path) -> Result<()> {
    let mut files = Vec::new();
    collect_source_files(dir, &mut files)?;
    files.sort();

    if files.is_empty() {
        miette::bail!("no .{SOURCE_EXTENSION} source files found under '{dir}'");
    }
    debug!(count = files.len(), "discovered source files");

    let mut passed = 0usize;
    let mut failed = 0usize;
    for file in &files {
        match check_file(file) {
            Ok(()) => {
                passed += 1;
                println!("ok   {file}");
            }
            Err(reason) => {
                failed += 1;
                println!("FAIL {file}");
                for line in reason.lines() {
                    println!("     {line}");
                }
            }
        }
    }

    println!("{passed} passed, {failed} failed");
    if failed > 0 {
        miette::bail!("{failed} file(s) failed to parse");
    }
    Ok(())
}

/// Parses one file, returning a rendered reason on failure.
fn check_file(file: &Utf8Path) -> std::result::Result<(), String> {
    let source = fs::read_to_string(file).map_err(|e| format!("read error: {e}"))?;
    let (_module, diagnostics) = parse(lex_with_eof(&source));
    let errors: Vec<String> = diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(ToString::to_string)
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

/// Recursively collects `.ryo` files. Symlinks are skipped to avoid
/// circular-link recursion.
fn collect_source_files(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read directory '{dir}'"))?
    {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|_| miette::miette!("non-UTF-8 path"))?;

        if file_type.is_dir() {
            collect_source_files(&entry_path, files)?;
        } else if file_type.is_file() && entry_path.extension() == Some(SOURCE_EXTENSION) {
            files.push(entry_path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn discovery_is_recursive_and_filtered() {
        let (_guard, dir) = temp_dir();
        fs::create_dir(dir.join("nested")).unwrap();
        fs::write(dir.join("a.ryo"), "var x = 1").unwrap();
        fs::write(dir.join("nested/b.ryo"), "var y = 2").unwrap();
        fs::write(dir.join("notes.txt"), "not a source file").unwrap();

        let mut files = Vec::new();
        collect_source_files(&dir, &mut files).unwrap();
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files[0].as_str().ends_with("a.ryo"));
        assert!(files[1].as_str().ends_with("b.ryo"));
    }

    #[test]
    fn clean_file_passes_and_broken_file_fails() {
        let (_guard, dir) = temp_dir();
        let good = dir.join("good.ryo");
        let bad = dir.join("bad.ryo");
        fs::write(&good, "var x = 1\nx = 2").unwrap();
        fs::write(&bad, "var = =").unwrap();

        assert!(check_file(&good).is_ok());
        assert!(check_file(&bad).is_err());
    }
}
