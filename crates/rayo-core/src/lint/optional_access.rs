// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: hint at unguarded access to optional values.
//!
//! Attribute or index access on a target the analyser infers as optional
//! will fault at runtime if the value is `None`. The fix is a `None` check
//! before the access.

use crate::analyse::infer_type;
use crate::ast::{Expression, Module};
use crate::ast_walker::walk_module_expressions;
use crate::lint::LintPass;
use crate::source_analysis::Diagnostic;

/// Lint pass that flags attribute/index access on optional-typed targets.
pub(crate) struct OptionalAccessPass;

impl LintPass for OptionalAccessPass {
    fn check(&self, module: &Module, diagnostics: &mut Vec<Diagnostic>) {
        walk_module_expressions(module, &mut |expr| match expr {
            Expression::Attribute { target, span, .. } if infer_type(target).is_optional() => {
                diagnostics.push(
                    Diagnostic::lint("possible unsafe dereference of optional value", *span)
                        .with_hint("add a None check before the dereference"),
                );
            }
            Expression::Index { target, span, .. } if infer_type(target).is_optional() => {
                diagnostics.push(
                    Diagnostic::lint("possible unsafe index of optional value", *span)
                        .with_hint("add a None check before the index access"),
                );
            }
            _ => {}
        });
    }
}
