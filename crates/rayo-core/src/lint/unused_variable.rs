// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag declared variables that are never assigned again.
//!
//! Delegates the actual bookkeeping to the semantic analyser and re-surfaces
//! its unused-variable findings as lint results with a remove-the-declaration
//! fix attached.

use crate::analyse;
use crate::ast::Module;
use crate::lint::LintPass;
use crate::source_analysis::Diagnostic;

/// Lint pass that flags unused variables.
pub(crate) struct UnusedVariablePass;

impl LintPass for UnusedVariablePass {
    fn check(&self, module: &Module, diagnostics: &mut Vec<Diagnostic>) {
        let mut findings: Vec<Diagnostic> = Vec::new();
        analyse::check(module, &mut findings);

        for finding in findings {
            if let Some(name) = finding.message.strip_prefix("unused variable: ") {
                let hint = format!("remove declaration of {name}");
                diagnostics.push(
                    Diagnostic::lint(finding.message.clone(), finding.span).with_hint(hint),
                );
            }
        }
    }
}
