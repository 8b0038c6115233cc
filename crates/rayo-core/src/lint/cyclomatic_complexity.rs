// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: flag modules whose cyclomatic complexity exceeds a threshold.
//!
//! Complexity starts at 1 and counts every `if`, `while`, `for`, and `try`
//! anywhere in the module as a branch point. Above 10 the module gets one
//! finding naming the measured value.

use crate::ast::{Module, Statement};
use crate::ast_walker::{Visitor, walk_module};
use crate::lint::LintPass;
use crate::source_analysis::Diagnostic;

const THRESHOLD: usize = 10;

/// Lint pass that measures whole-module cyclomatic complexity.
pub(crate) struct CyclomaticComplexityPass;

impl LintPass for CyclomaticComplexityPass {
    fn check(&self, module: &Module, diagnostics: &mut Vec<Diagnostic>) {
        let mut complexity = 1usize;
        let mut on_statement = |stmt: &Statement| {
            if matches!(
                stmt,
                Statement::If { .. }
                    | Statement::While { .. }
                    | Statement::For { .. }
                    | Statement::Try { .. }
            ) {
                complexity += 1;
            }
        };
        let mut on_expression = |_: &crate::ast::Expression| {};
        walk_module(
            module,
            &mut Visitor {
                on_statement: &mut on_statement,
                on_expression: &mut on_expression,
            },
        );

        if complexity > THRESHOLD {
            diagnostics.push(
                Diagnostic::lint(
                    format!("high cyclomatic complexity: {complexity}"),
                    module.span,
                )
                .with_hint("refactor to reduce branches"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::run_lint_passes;
    use crate::source_analysis::{Diagnostic, lex_with_eof, parse};

    fn lint(source: &str) -> Vec<Diagnostic> {
        let (module, parse_diags) = parse(lex_with_eof(source));
        assert!(
            parse_diags.is_empty(),
            "parse failed for lint fixture: {parse_diags:?}"
        );
        run_lint_passes(&module)
    }

    #[test]
    fn deeply_branched_module_is_flagged() {
        // Ten ifs push complexity to 11, one past the threshold.
        let source = "if a { x = 1 }\n".repeat(10);
        let diags = lint(&source);
        let found: Vec<_> = diags
            .iter()
            .filter(|d| d.message.contains("high cyclomatic complexity"))
            .collect();
        assert_eq!(found.len(), 1, "got: {found:?}");
        assert!(found[0].message.contains("11"));
    }

    #[test]
    fn nested_branches_count() {
        let source = "while a { if b { if c { if d { x = 1 } } } }\n".repeat(3);
        let diags = lint(&source);
        // 12 branch points + 1 base = 13.
        assert!(
            diags
                .iter()
                .any(|d| d.message.contains("high cyclomatic complexity: 13")),
            "got: {diags:?}"
        );
    }

    #[test]
    fn straight_line_module_is_quiet() {
        let diags = lint("var x = 1\nx = 2");
        assert!(
            diags
                .iter()
                .all(|d| !d.message.contains("cyclomatic")),
            "got: {diags:?}"
        );
    }
}
