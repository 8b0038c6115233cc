// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement lowering to Go.

use crate::ast::Statement;

use super::GenContext;
use super::expressions::emit_expression;

/// Lowers one statement into the context's buffer.
pub fn emit_statement(stmt: &Statement, ctx: &mut GenContext) {
    match stmt {
        Statement::FuncDef { name, body, .. } => {
            let header = format!("func {name}() {{");
            ctx.push_line(&header);
            ctx.indented(|ctx| emit_block(body, ctx));
            ctx.push_line("}");
        }
        Statement::VarDecl { name, value, .. } => {
            let line = format!("var {name} = {}", emit_expression(value, ctx));
            ctx.push_line(&line);
        }
        Statement::Assign { target, value, .. } => {
            // Bare names declare-and-initialize; other targets reassign.
            let op = if target.as_name().is_some() { ":=" } else { "=" };
            let line = format!(
                "{} {op} {}",
                emit_expression(target, ctx),
                emit_expression(value, ctx)
            );
            ctx.push_line(&line);
        }
        Statement::Return { value, .. } => {
            let line = match value {
                Some(value) => format!("return {}", emit_expression(value, ctx)),
                None => "return".to_string(),
            };
            ctx.push_line(&line);
        }
        Statement::If {
            condition,
            then_body,
            elifs,
            else_body,
            ..
        } => {
            let header = format!("if {} {{", emit_expression(condition, ctx));
            ctx.push_line(&header);
            ctx.indented(|ctx| emit_block(then_body, ctx));
            for branch in elifs {
                let header = format!("}} else if {} {{", emit_expression(&branch.condition, ctx));
                ctx.push_line(&header);
                ctx.indented(|ctx| emit_block(&branch.body, ctx));
            }
            if !else_body.is_empty() {
                ctx.push_line("} else {");
                ctx.indented(|ctx| emit_block(else_body, ctx));
            }
            ctx.push_line("}");
        }
        Statement::While { condition, body, .. } => {
            let header = format!("for {} {{", emit_expression(condition, ctx));
            ctx.push_line(&header);
            ctx.indented(|ctx| emit_block(body, ctx));
            ctx.push_line("}");
        }
        Statement::For { var, iter, body, .. } => {
            let header = format!("for _, {var} := range {} {{", emit_expression(iter, ctx));
            ctx.push_line(&header);
            ctx.indented(|ctx| emit_block(body, ctx));
            ctx.push_line("}");
        }
        Statement::Try {
            body,
            handlers,
            finally,
            ..
        } => emit_try(body, handlers, finally, ctx),
        Statement::Expr { expr, .. } => {
            let line = emit_expression(expr, ctx);
            ctx.push_line(&line);
        }
    }
}

fn emit_block(block: &[Statement], ctx: &mut GenContext) {
    for stmt in block {
        emit_statement(stmt, ctx);
    }
}

/// Lowers try/except/finally to an immediately-invoked closure: `finally`
/// becomes the outermost `defer`, the handlers run inside a deferred
/// `recover()` check, and the try body is the closure's own statements.
/// Deferred functions run last-in first-out, so handlers run before the
/// finally block, matching source order.
fn emit_try(
    body: &[Statement],
    handlers: &[crate::ast::ExceptHandler],
    finally: &[Statement],
    ctx: &mut GenContext,
) {
    ctx.push_line("func() {");
    ctx.indented(|ctx| {
        if !finally.is_empty() {
            ctx.push_line("defer func() {");
            ctx.indented(|ctx| emit_block(finally, ctx));
            ctx.push_line("}()");
        }
        if !handlers.is_empty() {
            let recovered = ctx.fresh_temp();
            ctx.push_line("defer func() {");
            ctx.indented(|ctx| {
                let check = format!("if {recovered} := recover(); {recovered} != nil {{");
                ctx.push_line(&check);
                ctx.indented(|ctx| {
                    for handler in handlers {
                        if let Some(name) = &handler.name {
                            let bind = format!("{name} := {recovered}");
                            ctx.push_line(&bind);
                            let silence = format!("_ = {name}");
                            ctx.push_line(&silence);
                        }
                        emit_block(&handler.body, ctx);
                    }
                });
                ctx.push_line("}");
            });
            ctx.push_line("}()");
        }
        emit_block(body, ctx);
    });
    ctx.push_line("}()");
}
