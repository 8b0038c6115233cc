// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint passes for Rayo source code.
//!
//! Lint checks are advisory style and safety hints, distinct from parse
//! errors and the analyser's warnings. They only surface through
//! [`run_lint_passes`]; normal `check`/`transpile` runs never report them.
//! Each finding carries a suggested fix in the diagnostic's hint field.
//!
//! # Adding a New Lint
//!
//! 1. Create `crates/rayo-core/src/lint/<your_lint>.rs`.
//! 2. Declare `pub(crate) struct YourLintPass;` implementing [`LintPass`].
//! 3. Add `mod your_lint;` below (keep alphabetical).
//! 4. Push `Box::new(your_lint::YourLintPass)` into `all_passes()` (keep
//!    alphabetical).

mod attribute_on_dynamic;
mod cyclomatic_complexity;
mod optional_access;
mod unused_variable;
// ── add new lint modules here (alphabetical) ──────────────────────────────

use crate::ast::Module;
use crate::source_analysis::Diagnostic;

/// A single lint pass.
///
/// Implementors inspect `module` and push [`Diagnostic`]s with
/// [`Severity::Lint`](crate::source_analysis::Severity) into `diagnostics`,
/// attaching any suggested fix as the diagnostic hint.
pub(crate) trait LintPass {
    fn check(&self, module: &Module, diagnostics: &mut Vec<Diagnostic>);
}

/// Construct the ordered list of all active lint passes.
///
/// **To register a new pass:** append `Box::new(your_module::YourPass)` in
/// alphabetical order. This is the only line that needs to change per lint.
fn all_passes() -> Vec<Box<dyn LintPass>> {
    vec![
        Box::new(attribute_on_dynamic::AttributeOnDynamicPass),
        Box::new(cyclomatic_complexity::CyclomaticComplexityPass),
        Box::new(optional_access::OptionalAccessPass),
        Box::new(unused_variable::UnusedVariablePass),
        // ── add new passes here (alphabetical) ────────────────────────────
    ]
}

/// Run all lint passes on a parsed module and return any lint diagnostics.
#[must_use]
pub fn run_lint_passes(module: &Module) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for pass in all_passes() {
        pass.check(module, &mut diagnostics);
    }
    diagnostics
}
