// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared AST walkers for analysis, codegen, and lint passes.
//!
//! Provides three functions:
//!
//! - [`walk_expression`] — pre-order recursive walk of one expression tree,
//!   calling a visitor closure on every node.
//! - [`walk_statement`] — pre-order walk of one statement, visiting every
//!   nested statement and every expression it contains.
//! - [`walk_module`] — pre-order walk of every statement in a module.
//!
//! Passes that must thread state through the traversal (scope tracking in
//! the analyzer, indentation in codegen) keep their own recursion; these
//! walkers cover the common stateless-visitor pattern, such as the code
//! generator's whole-tree search for `print` calls.

use crate::ast::{Expression, Module, Statement};

/// Visitor callbacks for [`walk_statement`] / [`walk_module`].
///
/// Passes that only care about expressions can use
/// [`walk_module_expressions`] instead of providing a statement callback.
pub struct Visitor<'a> {
    /// Called on every statement, before its children.
    pub on_statement: &'a mut dyn FnMut(&Statement),
    /// Called on every expression, before its children.
    pub on_expression: &'a mut dyn FnMut(&Expression),
}

/// Recursively walks an expression tree in pre-order, calling `f` on every
/// node before recursing into its children.
pub fn walk_expression(expr: &Expression, f: &mut dyn FnMut(&Expression)) {
    f(expr);
    match expr {
        Expression::Call { callee, args, .. } => {
            walk_expression(callee, f);
            for arg in args {
                walk_expression(arg, f);
            }
        }
        Expression::Index { target, index, .. } => {
            walk_expression(target, f);
            walk_expression(index, f);
        }
        Expression::Attribute { target, .. } => {
            walk_expression(target, f);
        }
        Expression::Unary { operand, .. } => {
            walk_expression(operand, f);
        }
        Expression::Binary { left, right, .. } => {
            walk_expression(left, f);
            walk_expression(right, f);
        }
        Expression::Dict { keys, values, .. } => {
            for (key, value) in keys.iter().zip(values) {
                walk_expression(key, f);
                walk_expression(value, f);
            }
        }
        Expression::List { elements, .. } => {
            for element in elements {
                walk_expression(element, f);
            }
        }
        Expression::Lambda { body, .. } => {
            walk_expression(body, f);
        }
        // Leaf nodes.
        Expression::Literal(..) | Expression::Name { .. } => {}
    }
}

/// Recursively walks a statement in pre-order, visiting nested statements and
/// every contained expression.
pub fn walk_statement(stmt: &Statement, visitor: &mut Visitor<'_>) {
    (visitor.on_statement)(stmt);
    match stmt {
        Statement::VarDecl { value, .. } => {
            walk_expression(value, visitor.on_expression);
        }
        Statement::Assign { target, value, .. } => {
            walk_expression(target, visitor.on_expression);
            walk_expression(value, visitor.on_expression);
        }
        Statement::If {
            condition,
            then_body,
            elifs,
            else_body,
            ..
        } => {
            walk_expression(condition, visitor.on_expression);
            for s in then_body {
                walk_statement(s, visitor);
            }
            for elif in elifs {
                walk_expression(&elif.condition, visitor.on_expression);
                for s in &elif.body {
                    walk_statement(s, visitor);
                }
            }
            for s in else_body {
                walk_statement(s, visitor);
            }
        }
        Statement::While {
            condition, body, ..
        } => {
            walk_expression(condition, visitor.on_expression);
            for s in body {
                walk_statement(s, visitor);
            }
        }
        Statement::For { iter, body, .. } => {
            walk_expression(iter, visitor.on_expression);
            for s in body {
                walk_statement(s, visitor);
            }
        }
        Statement::Return { value, .. } => {
            if let Some(value) = value {
                walk_expression(value, visitor.on_expression);
            }
        }
        Statement::Try {
            body,
            handlers,
            finally,
            ..
        } => {
            for s in body {
                walk_statement(s, visitor);
            }
            for handler in handlers {
                for s in &handler.body {
                    walk_statement(s, visitor);
                }
            }
            for s in finally {
                walk_statement(s, visitor);
            }
        }
        Statement::Expr { expr, .. } => {
            walk_expression(expr, visitor.on_expression);
        }
        Statement::FuncDef { body, .. } => {
            for s in body {
                walk_statement(s, visitor);
            }
        }
    }
}

/// Walks every statement (and contained expression) in a module, pre-order.
pub fn walk_module(module: &Module, visitor: &mut Visitor<'_>) {
    for stmt in &module.body {
        walk_statement(stmt, visitor);
    }
}

/// Walks every expression in a module, ignoring statement structure.
pub fn walk_module_expressions(module: &Module, f: &mut dyn FnMut(&Expression)) {
    let mut nop = |_: &Statement| {};
    let mut visitor = Visitor {
        on_statement: &mut nop,
        on_expression: f,
    };
    walk_module(module, &mut visitor);
}
