// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Control-flow completeness analysis.

use crate::ast::Statement;

/// Whether a block is guaranteed to execute a `return` on every path.
///
/// A block must return if any statement in it must return. A `return`
/// trivially does; an `if` must return only when both the then-branch and an
/// `else` branch (and every `elif`) must return; a `try` must return only
/// when its body and its `finally` block both must (a handler may divert
/// either one). Loops never count: their bodies may execute zero times.
#[must_use]
pub fn must_return(block: &[Statement]) -> bool {
    block.iter().any(statement_must_return)
}

fn statement_must_return(stmt: &Statement) -> bool {
    match stmt {
        Statement::Return { .. } => true,
        Statement::If {
            then_body,
            elifs,
            else_body,
            ..
        } => {
            // Without an else branch some path falls through.
            !else_body.is_empty()
                && must_return(then_body)
                && must_return(else_body)
                && elifs.iter().all(|branch| must_return(&branch.body))
        }
        Statement::Try { body, finally, .. } => must_return(body) && must_return(finally),
        _ => false,
    }
}

/// Whether a block contains a `return` anywhere, including nested blocks.
#[must_use]
pub fn contains_return(block: &[Statement]) -> bool {
    block.iter().any(|stmt| match stmt {
        Statement::Return { .. } => true,
        Statement::If {
            then_body,
            elifs,
            else_body,
            ..
        } => {
            contains_return(then_body)
                || contains_return(else_body)
                || elifs.iter().any(|branch| contains_return(&branch.body))
        }
        Statement::While { body, .. } | Statement::For { body, .. } => contains_return(body),
        Statement::Try {
            body,
            handlers,
            finally,
            ..
        } => {
            contains_return(body)
                || contains_return(finally)
                || handlers.iter().any(|handler| contains_return(&handler.body))
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{lex_with_eof, parse};

    fn body_of(source: &str) -> Vec<Statement> {
        let (module, diagnostics) = parse(lex_with_eof(source));
        assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
        module.body
    }

    #[test]
    fn plain_return_must_return() {
        assert!(must_return(&body_of("return 1")));
    }

    #[test]
    fn if_without_else_may_fall_through() {
        assert!(!must_return(&body_of("if x { return 1 }")));
    }

    #[test]
    fn if_with_both_branches_returning() {
        assert!(must_return(&body_of(
            "if x { return 1 } else { return 2 }"
        )));
    }

    #[test]
    fn elif_chain_needs_every_branch() {
        assert!(must_return(&body_of(
            "if a { return 1 } elif b { return 2 } else { return 3 }"
        )));
        assert!(!must_return(&body_of(
            "if a { return 1 } elif b { x = 1 } else { return 3 }"
        )));
    }

    #[test]
    fn loops_never_must_return() {
        assert!(!must_return(&body_of("while true { return 1 }")));
        assert!(!must_return(&body_of("for x in xs { return 1 }")));
    }

    #[test]
    fn try_needs_body_and_finally() {
        assert!(must_return(&body_of(
            "try { return 1 } except { x = 1 } finally { return 2 }"
        )));
        assert!(!must_return(&body_of("try { return 1 } except { x = 1 }")));
        assert!(!must_return(&body_of(
            "try { x = 1 } except { y = 2 } finally { return 3 }"
        )));
    }

    #[test]
    fn contains_return_sees_nested_blocks() {
        assert!(contains_return(&body_of("while x { return 1 }")));
        assert!(contains_return(&body_of(
            "try { x = 1 } except { return 2 }"
        )));
        assert!(!contains_return(&body_of("var x = 1")));
    }
}
