// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Multi-file module resolution.
//!
//! [`ModuleResolver::compile`] takes an entry file and produces one merged
//! Go compilation unit covering the entry module and every transitively
//! imported local module. Import paths ending in the local source extension
//! (`.ryo`) are read and recursed into; all other import paths pass through
//! as Go import directives.
//!
//! A visited set keyed by path makes import cycles safe: each file is read,
//! parsed, and emitted at most once, so `a imports b, b imports a`
//! terminates with each module's statements appearing exactly once.
//!
//! Unlike single-module generation, resolution is the layer where parse
//! errors become hard failures: a merged unit built from a broken module
//! would be silently wrong.

use std::collections::HashSet;
use std::fmt::Write;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use ecow::EcoString;
use thiserror::Error;
use tracing::debug;

use crate::ast::Module;
use crate::codegen::go::{GenContext, contains_print, emit_top_level};
use crate::source_analysis::{Diagnostic, lex_with_eof, parse};

/// File extension that marks an import as a local module to recurse into.
pub const SOURCE_EXTENSION: &str = "ryo";

/// Errors from multi-file compilation.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ResolveError {
    /// A source file (entry or transitively imported) could not be read.
    #[error("failed to read {path}")]
    FileRead {
        /// The unreadable file.
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file did not parse cleanly.
    #[error("parse errors in {path}")]
    ParseFailed {
        /// The offending file.
        path: Utf8PathBuf,
        /// Everything the parser reported for that file.
        diagnostics: Vec<Diagnostic>,
    },
}

/// Resolves an entry module and its transitive local imports into one
/// compilation unit.
#[derive(Debug, Default)]
pub struct ModuleResolver {
    include_paths: Vec<Utf8PathBuf>,
}

impl ModuleResolver {
    /// Creates a resolver with no extra search paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that also searches `include_paths` for local
    /// imports not found next to their importing file.
    #[must_use]
    pub fn with_include_paths(include_paths: Vec<Utf8PathBuf>) -> Self {
        Self { include_paths }
    }

    /// Compiles `entry` and every transitively imported local module into a
    /// single Go unit.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::FileRead`] if any file in the graph cannot be
    /// read, or [`ResolveError::ParseFailed`] if any file has parse errors.
    pub fn compile(&self, entry: &Utf8Path) -> Result<String, ResolveError> {
        let mut visited = HashSet::new();
        let mut functions = Vec::new();
        let mut imports = Vec::new();
        self.collect(entry, &mut visited, &mut functions, &mut imports)?;

        let mut unit = String::from("package main\n\n");

        // Deduplicate first-seen; local module paths never become Go
        // import directives.
        let mut seen = HashSet::new();
        for import in &imports {
            if !import.ends_with(&format!(".{SOURCE_EXTENSION}")) && seen.insert(import.clone()) {
                let _ = writeln!(unit, "import \"{import}\"");
            }
        }

        for function in &functions {
            unit.push_str(function);
            unit.push('\n');
        }

        Ok(unit)
    }

    /// Depth-first collection: parse `path`, recurse into its local imports
    /// first, then emit this module's top level.
    fn collect(
        &self,
        path: &Utf8Path,
        visited: &mut HashSet<Utf8PathBuf>,
        functions: &mut Vec<String>,
        imports: &mut Vec<EcoString>,
    ) -> Result<(), ResolveError> {
        if !visited.insert(path.to_path_buf()) {
            return Ok(());
        }
        debug!(%path, "resolving module");

        let source = fs::read_to_string(path).map_err(|source| ResolveError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let (mut module, diagnostics) = parse(lex_with_eof(&source));
        module.name = EcoString::from(path.file_stem().unwrap_or("main"));
        let errors: Vec<Diagnostic> = diagnostics.into_iter().filter(Diagnostic::is_error).collect();
        if !errors.is_empty() {
            return Err(ResolveError::ParseFailed {
                path: path.to_path_buf(),
                diagnostics: errors,
            });
        }

        if contains_print(&module) {
            imports.push(EcoString::from("fmt"));
        }

        for import in &module.imports {
            imports.push(import.path.clone());
            if import.path.ends_with(&format!(".{SOURCE_EXTENSION}")) {
                let target = self.locate(path, import.path.as_str());
                self.collect(&target, visited, functions, imports)?;
            }
        }

        let mut ctx = GenContext::new("main");
        functions.extend(emit_top_level(&module, &mut ctx));
        Ok(())
    }

    /// Finds the file a local import path refers to: relative to the
    /// importing file's directory first, then each include path. Falls back
    /// to the importer-relative candidate so the read error names a
    /// sensible path.
    fn locate(&self, importer: &Utf8Path, import_path: &str) -> Utf8PathBuf {
        let relative = import_path.strip_prefix("./").unwrap_or(import_path);
        let importer_dir = importer.parent().unwrap_or(Utf8Path::new("."));

        let candidate = importer_dir.join(relative);
        if candidate.is_file() {
            return candidate;
        }
        for include in &self.include_paths {
            let candidate = include.join(relative);
            if candidate.is_file() {
                return candidate;
            }
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn single_module_compiles() {
        let (_guard, dir) = temp_dir();
        let entry = write_file(&dir, "main.ryo", "var x = 42\nreturn x");
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert!(unit.contains("package main"));
        assert!(unit.contains("func main() {"));
        assert!(unit.contains("var x = 42"));
        assert!(unit.contains("return x"));
    }

    #[test]
    fn local_import_is_inlined_not_imported() {
        let (_guard, dir) = temp_dir();
        write_file(&dir, "util.ryo", "def helper() { x = 1 }");
        let entry = write_file(&dir, "main.ryo", "import './util.ryo'\nreturn 0");
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert!(unit.contains("func helper() {"));
        assert!(!unit.contains("import \"./util.ryo\""));
    }

    #[test]
    fn import_cycle_terminates_with_each_module_once() {
        let (_guard, dir) = temp_dir();
        write_file(&dir, "a.ryo", "import './b.ryo'\ndef fa() { x = 1 }");
        write_file(&dir, "b.ryo", "import './a.ryo'\ndef fb() { x = 2 }");
        let entry = dir.join("a.ryo");
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert_eq!(unit.matches("func fa() {").count(), 1);
        assert_eq!(unit.matches("func fb() {").count(), 1);
    }

    #[test]
    fn go_imports_are_deduplicated() {
        let (_guard, dir) = temp_dir();
        write_file(&dir, "util.ryo", "import 'strings'\ndef h() { x = 1 }");
        let entry = write_file(
            &dir,
            "main.ryo",
            "import 'strings'\nimport './util.ryo'\nvar x = 1",
        );
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert_eq!(unit.matches("import \"strings\"").count(), 1);
    }

    #[test]
    fn print_anywhere_pulls_in_fmt() {
        let (_guard, dir) = temp_dir();
        write_file(&dir, "util.ryo", "def shout() { print('hi') }");
        let entry = write_file(&dir, "main.ryo", "import './util.ryo'\nvar x = 1");
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert!(unit.contains("import \"fmt\""));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let (_guard, dir) = temp_dir();
        let entry = dir.join("absent.ryo");
        let err = ModuleResolver::new().compile(&entry).unwrap_err();
        assert!(matches!(err, ResolveError::FileRead { .. }));
    }

    #[test]
    fn missing_import_names_the_imported_file() {
        let (_guard, dir) = temp_dir();
        let entry = write_file(&dir, "main.ryo", "import './absent.ryo'\nvar x = 1");
        let err = ModuleResolver::new().compile(&entry).unwrap_err();
        match err {
            ResolveError::FileRead { path, .. } => {
                assert!(path.as_str().ends_with("absent.ryo"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn parse_errors_fail_resolution() {
        let (_guard, dir) = temp_dir();
        let entry = write_file(&dir, "main.ryo", "var = =");
        let err = ModuleResolver::new().compile(&entry).unwrap_err();
        assert!(matches!(err, ResolveError::ParseFailed { .. }));
    }

    #[test]
    fn include_paths_are_searched() {
        let (_guard_lib, lib_dir) = temp_dir();
        let (_guard, dir) = temp_dir();
        write_file(&lib_dir, "shared.ryo", "def shared() { x = 1 }");
        let entry = write_file(&dir, "main.ryo", "import 'shared.ryo'\nvar x = 1");
        let resolver = ModuleResolver::with_include_paths(vec![lib_dir]);
        let unit = resolver.compile(&entry).unwrap();
        assert!(unit.contains("func shared() {"));
    }

    #[test]
    fn module_with_top_level_return_is_wrapped_once() {
        let (_guard, dir) = temp_dir();
        write_file(&dir, "util.ryo", "def h() { x = 1 }");
        let entry = write_file(&dir, "main.ryo", "import './util.ryo'\nvar x = 1\nreturn x");
        let unit = ModuleResolver::new().compile(&entry).unwrap();
        assert_eq!(unit.matches("func main() {").count(), 1);
    }
}
