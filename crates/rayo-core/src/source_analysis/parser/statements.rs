// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement parsing.
//!
//! Statement dispatch, in the order tried: function definition, `return`,
//! `if`, `while`, `for`, `try`, `var` declaration, then expression — and if
//! the expression is followed by `=`, it is reinterpreted as an assignment
//! target.

use crate::ast::{ElifBranch, ExceptHandler, Expression, Literal, Statement};
use crate::source_analysis::{Span, TokenKind};

use super::Parser;

impl Parser {
    /// Parses one statement, or returns `None` if no statement can start at
    /// the current token (the caller guarantees forward progress).
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        let token = self.current_token().clone();
        if token.kind == TokenKind::Eof || token.kind == TokenKind::RBrace {
            return None;
        }

        if token.kind == TokenKind::Keyword {
            match token.text.as_str() {
                "def" => return self.parse_func_def(),
                "return" => return Some(self.parse_return()),
                "if" => return Some(self.parse_if()),
                "while" => return Some(self.parse_while()),
                "for" => return self.parse_for(),
                "try" => return Some(self.parse_try()),
                "var" => return self.parse_var_decl(),
                _ => {}
            }
        }

        // Expression statement, or assignment if followed by `=`.
        let start = self.current_token().span();
        let expr = self.parse_expression()?;

        if self.current_token().is_operator("=") {
            self.advance(); // `=`
            let value = self.parse_expression_or_recover();
            return Some(Statement::Assign {
                target: expr,
                value,
                span: start.merge(self.last_span()),
            });
        }

        Some(Statement::Expr {
            span: expr.span(),
            expr,
        })
    }

    /// Parses an expression, or records an error and synthesizes a `None`
    /// literal so the surrounding statement can still be represented.
    pub(crate) fn parse_expression_or_recover(&mut self) -> Expression {
        let span = self.current_token().span();
        match self.parse_expression() {
            Some(expr) => expr,
            None => {
                self.error_at_current("expected expression", vec!["expression"]);
                Expression::Literal(Literal::None, Span::at(span.start))
            }
        }
    }

    /// Parses `def name(...) { ... }`.
    ///
    /// Parameter lists are not parsed yet: everything up to the closing `)`
    /// is skipped and the definition gets an empty parameter list.
    fn parse_func_def(&mut self) -> Option<Statement> {
        let start = self.current_token().span();
        self.advance(); // `def`

        if self.current_token().kind != TokenKind::Identifier {
            self.error_at_current("expected function name", vec!["identifier"]);
            return None;
        }
        let name = self.current_token().text.clone();
        self.advance();

        if self.current_token().kind != TokenKind::LParen {
            self.error_at_current("expected '(' after function name", vec!["'('"]);
            return None;
        }
        self.advance(); // `(`

        // TODO(params): parse the parameter list instead of skipping it.
        while self.current_token().kind != TokenKind::RParen && !self.at_eof() {
            self.advance();
        }
        if self.current_token().kind == TokenKind::RParen {
            self.advance();
        }

        let body = self.parse_block();
        Some(Statement::FuncDef {
            name,
            params: Vec::new(),
            body,
            span: start.merge(self.last_span()),
        })
    }

    /// Parses `return` with an optional trailing expression.
    fn parse_return(&mut self) -> Statement {
        let start = self.current_token().span();
        self.advance(); // `return`

        let value = if self.current_token().kind == TokenKind::RBrace || self.at_eof() {
            None
        } else {
            self.parse_expression()
        };

        Statement::Return {
            value,
            span: start.merge(self.last_span()),
        }
    }

    /// Parses `if cond { ... } elif cond { ... } else { ... }`.
    fn parse_if(&mut self) -> Statement {
        let start = self.current_token().span();
        self.advance(); // `if`

        let condition = self.parse_expression_or_recover();
        let then_body = self.parse_block();

        let mut elifs = Vec::new();
        while self.current_token().is_keyword("elif") {
            let elif_start = self.current_token().span();
            self.advance(); // `elif`
            let condition = self.parse_expression_or_recover();
            let body = self.parse_block();
            elifs.push(ElifBranch {
                condition,
                body,
                span: elif_start.merge(self.last_span()),
            });
        }

        let else_body = if self.current_token().is_keyword("else") {
            self.advance(); // `else`
            self.parse_block()
        } else {
            Vec::new()
        };

        Statement::If {
            condition,
            then_body,
            elifs,
            else_body,
            span: start.merge(self.last_span()),
        }
    }

    /// Parses `while cond { ... }`.
    fn parse_while(&mut self) -> Statement {
        let start = self.current_token().span();
        self.advance(); // `while`

        let condition = self.parse_expression_or_recover();
        let body = self.parse_block();

        Statement::While {
            condition,
            body,
            span: start.merge(self.last_span()),
        }
    }

    /// Parses `for name in expr { ... }`.
    fn parse_for(&mut self) -> Option<Statement> {
        let start = self.current_token().span();
        self.advance(); // `for`

        if self.current_token().kind != TokenKind::Identifier {
            self.error_at_current("expected loop variable", vec!["identifier"]);
            return None;
        }
        let var = self.current_token().text.clone();
        self.advance();

        if self.current_token().is_keyword("in") {
            self.advance();
        } else {
            self.error_at_current("expected 'in'", vec!["keyword"]);
        }

        let iter = self.parse_expression_or_recover();
        let body = self.parse_block();

        Some(Statement::For {
            var,
            iter,
            body,
            span: start.merge(self.last_span()),
        })
    }

    /// Parses `try { ... } except [name] { ... } finally { ... }`.
    fn parse_try(&mut self) -> Statement {
        let start = self.current_token().span();
        self.advance(); // `try`

        let body = self.parse_block();

        let mut handlers = Vec::new();
        while self.current_token().is_keyword("except") {
            let handler_start = self.current_token().span();
            self.advance(); // `except`
            let name = if self.current_token().kind == TokenKind::Identifier {
                let name = self.current_token().text.clone();
                self.advance();
                Some(name)
            } else {
                None
            };
            let body = self.parse_block();
            handlers.push(ExceptHandler {
                name,
                body,
                span: handler_start.merge(self.last_span()),
            });
        }

        let finally = if self.current_token().is_keyword("finally") {
            self.advance(); // `finally`
            self.parse_block()
        } else {
            Vec::new()
        };

        Statement::Try {
            body,
            handlers,
            finally,
            span: start.merge(self.last_span()),
        }
    }

    /// Parses `var name = expr`.
    fn parse_var_decl(&mut self) -> Option<Statement> {
        let start = self.current_token().span();
        self.advance(); // `var`

        if self.current_token().kind != TokenKind::Identifier {
            self.error_at_current("expected variable name", vec!["identifier"]);
            return None;
        }
        let name = self.current_token().text.clone();
        self.advance();

        if self.current_token().is_operator("=") {
            self.advance();
        } else {
            self.error_at_current("expected '=' in declaration", vec!["operator"]);
            return None;
        }

        let value = self.parse_expression_or_recover();
        Some(Statement::VarDecl {
            name,
            value,
            span: start.merge(self.last_span()),
        })
    }
}
