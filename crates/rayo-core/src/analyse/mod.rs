// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis.
//!
//! [`check`] walks a parsed module and reports unused variables, unsafe
//! accesses to optional values, and functions that may not return on every
//! path. It never mutates the AST and never fails: every finding goes
//! through the [`DiagnosticSink`] passed by the caller, so the analyser
//! carries no global state.
//!
//! The analysis deliberately uses a single scope for the whole pass: a name
//! declared inside a branch stays visible to sibling branches and to the
//! rest of the module. True lexical shadowing is not implemented.

mod flow;
mod scope;
mod types;

pub use flow::{contains_return, must_return};
pub use scope::{ScopeArena, ScopeId};
pub use types::{BasicType, Type, infer_type};

use crate::ast::{Expression, Module, Statement};
use crate::source_analysis::{Diagnostic, Span};

/// Receives analysis findings.
///
/// The analyser is written against this capability instead of a concrete
/// collection so callers decide how findings are stored or rendered.
pub trait DiagnosticSink {
    /// Reports one finding at `span`.
    fn report(&mut self, span: Span, message: &str);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, span: Span, message: &str) {
        self.push(Diagnostic::warning(message, span));
    }
}

/// Analyses a module, reporting findings through `sink`.
///
/// Reports, in this order: null-safety and flow findings in statement order,
/// then unused variables in declaration order.
pub fn check(module: &Module, sink: &mut dyn DiagnosticSink) {
    let mut arena = ScopeArena::new();
    let scope = arena.alloc(None);

    for stmt in &module.body {
        check_statement(stmt, scope, &mut arena, sink);
    }

    for (name, span) in arena.unused(scope) {
        sink.report(span, &format!("unused variable: {name}"));
    }
}

fn check_statement(
    stmt: &Statement,
    scope: ScopeId,
    arena: &mut ScopeArena,
    sink: &mut dyn DiagnosticSink,
) {
    match stmt {
        Statement::VarDecl { name, value, span } => {
            check_expression(value, sink);
            arena.declare(scope, name, infer_type(value), *span);
        }
        Statement::Assign { target, value, .. } => {
            check_expression(value, sink);
            // Assigning to a bare name counts as using it; other targets are
            // accesses in their own right.
            if let Some(name) = target.as_name() {
                arena.mark_used(scope, name);
            } else {
                check_expression(target, sink);
            }
        }
        Statement::If {
            condition,
            then_body,
            elifs,
            else_body,
            ..
        } => {
            check_expression(condition, sink);
            check_block(then_body, scope, arena, sink);
            for branch in elifs {
                check_expression(&branch.condition, sink);
                check_block(&branch.body, scope, arena, sink);
            }
            check_block(else_body, scope, arena, sink);
        }
        Statement::While { condition, body, .. } => {
            check_expression(condition, sink);
            check_block(body, scope, arena, sink);
        }
        Statement::For {
            var, iter, body, span,
        } => {
            check_expression(iter, sink);
            arena.declare(scope, var, Type::Any, *span);
            check_block(body, scope, arena, sink);
        }
        Statement::Return { value, .. } => {
            if let Some(value) = value {
                check_expression(value, sink);
            }
        }
        Statement::Try {
            body,
            handlers,
            finally,
            ..
        } => {
            check_block(body, scope, arena, sink);
            for handler in handlers {
                check_block(&handler.body, scope, arena, sink);
            }
            check_block(finally, scope, arena, sink);
        }
        Statement::Expr { expr, .. } => check_expression(expr, sink),
        Statement::FuncDef {
            name, body, span, ..
        } => {
            if contains_return(body) && !must_return(body) {
                sink.report(*span, &format!("function '{name}' may not return on all paths"));
            }
            check_block(body, scope, arena, sink);
        }
    }
}

fn check_block(
    block: &[Statement],
    scope: ScopeId,
    arena: &mut ScopeArena,
    sink: &mut dyn DiagnosticSink,
) {
    for stmt in block {
        check_statement(stmt, scope, arena, sink);
    }
}

/// Reports unsafe accesses to optional-typed targets anywhere in `expr`.
pub fn check_expression(expr: &Expression, sink: &mut dyn DiagnosticSink) {
    crate::ast_walker::walk_expression(expr, &mut |node| match node {
        Expression::Attribute { target, span, .. } => {
            if infer_type(target).is_optional() {
                sink.report(*span, "unsafe dereference of optional value");
            }
        }
        Expression::Index { target, span, .. } => {
            if infer_type(target).is_optional() {
                sink.report(*span, "unsafe index of optional value");
            }
        }
        _ => {}
    });
}
