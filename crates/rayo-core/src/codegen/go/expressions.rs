// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression lowering to Go.

use crate::ast::{Expression, Literal};

use super::GenContext;

/// Lowers one expression to Go source text.
///
/// Lambdas have no Go lowering and render as the `<lambda>` placeholder
/// marker.
pub fn emit_expression(expr: &Expression, ctx: &mut GenContext) -> String {
    match expr {
        Expression::Literal(literal, _) => emit_literal(literal),
        Expression::Name { name, .. } => name.to_string(),
        Expression::Call { callee, args, .. } => {
            let args: Vec<String> = args.iter().map(|arg| emit_expression(arg, ctx)).collect();
            let args = args.join(", ");
            if callee.as_name().is_some_and(|name| name == "print") {
                format!("fmt.Println({args})")
            } else {
                format!("{}({args})", emit_expression(callee, ctx))
            }
        }
        Expression::Index { target, index, .. } => {
            format!(
                "{}[{}]",
                emit_expression(target, ctx),
                emit_expression(index, ctx)
            )
        }
        Expression::Attribute { target, name, .. } => {
            format!("{}.{name}", emit_expression(target, ctx))
        }
        Expression::Unary { op, operand, .. } => {
            format!("{op}{}", emit_expression(operand, ctx))
        }
        Expression::Binary {
            op, left, right, ..
        } => {
            format!(
                "{} {op} {}",
                emit_expression(left, ctx),
                emit_expression(right, ctx)
            )
        }
        Expression::Dict { keys, values, .. } => {
            let entries: Vec<String> = keys
                .iter()
                .zip(values)
                .map(|(key, value)| {
                    format!(
                        "{}: {}",
                        emit_expression(key, ctx),
                        emit_expression(value, ctx)
                    )
                })
                .collect();
            format!("map[string]any{{{}}}", entries.join(", "))
        }
        Expression::List { elements, .. } => {
            let elements: Vec<String> = elements
                .iter()
                .map(|element| emit_expression(element, ctx))
                .collect();
            format!("[]any{{{}}}", elements.join(", "))
        }
        Expression::Lambda { .. } => "<lambda>".to_string(),
    }
}

fn emit_literal(literal: &Literal) -> String {
    match literal {
        Literal::Int(value) => value.to_string(),
        Literal::Str(value) => quote_string(value),
        Literal::Bool(value) => value.to_string(),
        Literal::None => "nil".to_string(),
    }
}

/// Re-quotes a string value with Go's double-quoted syntax, escaping
/// backslashes, quotes, and control characters the source syntax allows raw.
fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
