// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `rayo run` — transpile a program and execute it with the Go toolchain.

use std::fs;
use std::process::Command;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};
use rayo_core::resolve::ModuleResolver;
use tracing::{debug, instrument};

/// Compile `file` to a sibling `<stem>_tmp.go`, run it via `go run` with
/// inherited stdio, then delete the intermediate file regardless of outcome.
/// The program's exit status becomes this process's exit status.
#[instrument(skip_all, fields(file = %file))]
pub fn run(file: &Utf8Path, args: &[String], include_paths: &[Utf8PathBuf]) -> Result<()> {
    let resolver = ModuleResolver::with_include_paths(include_paths.to_vec());
    let unit = resolver.compile(file)?;

    let stem = file.file_stem().unwrap_or("main");
    let temp = file.with_file_name(format!("{stem}_tmp.go"));
    fs::write(&temp, unit)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write '{temp}'"))?;
    debug!(%temp, "wrote intermediate Go file");

    let status = Command::new("go")
        .arg("run")
        .arg(temp.as_str())
        .args(args)
        .status();

    // The intermediate file goes away whether or not the program ran.
    let _ = fs::remove_file(&temp);

    let status = status
        .into_diagnostic()
        .wrap_err("failed to invoke the go toolchain")?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
