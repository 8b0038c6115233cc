// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag attribute access on dynamically-typed values.
//!
//! Attribute syntax on a value the analyser only knows as `any` is usually a
//! dict read spelled with the wrong accessor; the generated code will treat
//! it as a struct field and fail to compile.
//!
//! ```text
//! # Bad — obj is dynamically typed, .name is likely a dict key
//! obj.name
//!
//! # Good
//! obj['name']
//! ```

use crate::analyse::{Type, infer_type};
use crate::ast::{Expression, Module};
use crate::ast_walker::walk_module_expressions;
use crate::lint::LintPass;
use crate::source_analysis::Diagnostic;

/// Lint pass that flags attribute access on `any`-typed targets.
pub(crate) struct AttributeOnDynamicPass;

impl LintPass for AttributeOnDynamicPass {
    fn check(&self, module: &Module, diagnostics: &mut Vec<Diagnostic>) {
        walk_module_expressions(module, &mut |expr| {
            if let Expression::Attribute { target, name, span } = expr {
                if infer_type(target) == Type::Any {
                    diagnostics.push(
                        Diagnostic::lint(
                            "suspicious attribute access on dict-like object",
                            *span,
                        )
                        .with_hint(format!("use obj['{name}'] instead of obj.{name}")),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::run_lint_passes;
    use crate::source_analysis::{Diagnostic, Severity, lex_with_eof, parse};

    fn lint(source: &str) -> Vec<Diagnostic> {
        let (module, parse_diags) = parse(lex_with_eof(source));
        assert!(
            parse_diags.is_empty(),
            "parse failed for lint fixture: {parse_diags:?}"
        );
        run_lint_passes(&module)
    }

    #[test]
    fn attribute_on_name_is_suspicious() {
        let diags = lint("obj.name");
        let found: Vec<_> = diags
            .iter()
            .filter(|d| d.message.contains("suspicious attribute access"))
            .collect();
        assert_eq!(found.len(), 1, "got: {found:?}");
        assert_eq!(found[0].severity, Severity::Lint);
        assert!(found[0].hint.as_deref().unwrap().contains("obj['name']"));
    }

    #[test]
    fn attribute_on_operator_result_is_suspicious() {
        // Inference does not see through operators, so the target is
        // dynamically typed and the access gets flagged.
        let diags = lint("(1 + 2).name");
        assert!(
            diags
                .iter()
                .any(|d| d.message.contains("suspicious attribute access")),
            "got: {diags:?}"
        );
    }

    #[test]
    fn index_access_is_fine() {
        let diags = lint("obj['name']");
        assert!(
            diags
                .iter()
                .all(|d| !d.message.contains("suspicious attribute access")),
            "got: {diags:?}"
        );
    }
}
