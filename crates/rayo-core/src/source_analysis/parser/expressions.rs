// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing.
//!
//! Precedence climbing with two binary levels (comparison, additive), a
//! prefix-unary level, and a postfix loop for call/index/attribute chains.

use crate::ast::{Expression, Literal};
use crate::source_analysis::{Span, TokenKind};

use super::{Parser, strip_quotes};

/// Comparison operators: non-associative chains are allowed and parse
/// left-associatively.
const COMPARISON_OPS: &[&str] = &["<", ">", "==", "!="];

/// Additive operators (also string concatenation for `+`).
const ADDITIVE_OPS: &[&str] = &["+", "-"];

impl Parser {
    /// Parses one expression, or returns `None` if the current token cannot
    /// start an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Expression> {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Option<Expression> {
        let mut expr = self.parse_additive()?;
        while self.current_is_operator_in(COMPARISON_OPS) {
            let op = self.current_token().text.clone();
            self.advance();
            let Some(right) = self.parse_additive() else {
                self.error_at_current("expected expression after operator", vec!["expression"]);
                break;
            };
            let span = expr.span().merge(right.span());
            expr = Expression::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                span,
            };
        }
        Some(expr)
    }

    fn parse_additive(&mut self) -> Option<Expression> {
        let mut expr = self.parse_unary()?;
        while self.current_is_operator_in(ADDITIVE_OPS) {
            let op = self.current_token().text.clone();
            self.advance();
            let Some(right) = self.parse_unary() else {
                self.error_at_current("expected expression after operator", vec!["expression"]);
                break;
            };
            let span = expr.span().merge(right.span());
            expr = Expression::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                span,
            };
        }
        Some(expr)
    }

    fn parse_unary(&mut self) -> Option<Expression> {
        let token = self.current_token();
        if token.is_operator("!") || token.is_operator("-") {
            let span = token.span();
            let op = token.text.clone();
            self.advance();
            let Some(operand) = self.parse_unary() else {
                self.error_at_current("expected expression after operator", vec!["expression"]);
                return None;
            };
            let span = span.merge(operand.span());
            return Some(Expression::Unary {
                op,
                operand: Box::new(operand),
                span,
            });
        }
        self.parse_postfix()
    }

    /// Parses a primary expression and then repeats while the next token
    /// opens a call `(`, an index `[`, or a member access `.`.
    fn parse_postfix(&mut self) -> Option<Expression> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current_token().kind {
                TokenKind::LParen => {
                    self.advance(); // `(`
                    let args = self.parse_argument_list();
                    if self.current_token().kind == TokenKind::RParen {
                        self.advance();
                    } else {
                        self.error_at_current("unclosed call", vec!["')'"]);
                    }
                    let span = expr.span().merge(self.last_span());
                    expr = Expression::Call {
                        callee: Box::new(expr),
                        args,
                        span,
                    };
                }
                TokenKind::LBracket => {
                    self.advance(); // `[`
                    let index = self.parse_expression_or_recover();
                    if self.current_token().kind == TokenKind::RBracket {
                        self.advance();
                    } else {
                        self.error_at_current("unclosed index", vec!["']'"]);
                    }
                    let span = expr.span().merge(self.last_span());
                    expr = Expression::Index {
                        target: Box::new(expr),
                        index: Box::new(index),
                        span,
                    };
                }
                TokenKind::Dot => {
                    self.advance(); // `.`
                    if self.current_token().kind != TokenKind::Identifier {
                        self.error_at_current("expected attribute name", vec!["identifier"]);
                        break;
                    }
                    let name = self.current_token().text.clone();
                    self.advance();
                    let span = expr.span().merge(self.last_span());
                    expr = Expression::Attribute {
                        target: Box::new(expr),
                        name,
                        span,
                    };
                }
                _ => break,
            }
        }

        Some(expr)
    }

    /// Parses a comma-separated argument list up to (but not including) `)`.
    fn parse_argument_list(&mut self) -> Vec<Expression> {
        let mut args = Vec::new();
        if self.current_token().kind == TokenKind::RParen {
            return args;
        }
        loop {
            if let Some(arg) = self.parse_expression() {
                args.push(arg);
            } else {
                self.error_at_current("expected argument", vec!["expression"]);
                break;
            }
            if self.current_token().kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        args
    }

    fn parse_primary(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();
        let span = token.span();
        match token.kind {
            TokenKind::Number => {
                let value = match token.text.parse::<i64>() {
                    Ok(value) => value,
                    Err(_) => {
                        self.error_at_current("integer literal out of range", vec!["number"]);
                        0
                    }
                };
                self.advance();
                Some(Expression::Literal(Literal::Int(value), span))
            }
            TokenKind::Str => {
                let value = strip_quotes(&token.text);
                self.advance();
                Some(Expression::Literal(Literal::Str(value), span))
            }
            TokenKind::Identifier => {
                let name = token.text.clone();
                self.advance();
                Some(Expression::Name { name, span })
            }
            TokenKind::Keyword => match token.text.as_str() {
                "None" => {
                    self.advance();
                    Some(Expression::Literal(Literal::None, span))
                }
                "true" => {
                    self.advance();
                    Some(Expression::Literal(Literal::Bool(true), span))
                }
                "false" => {
                    self.advance();
                    Some(Expression::Literal(Literal::Bool(false), span))
                }
                _ => None,
            },
            TokenKind::LParen => {
                self.advance(); // `(`
                let inner = self.parse_expression_or_recover();
                if self.current_token().kind == TokenKind::RParen {
                    self.advance();
                } else {
                    self.error_at_current("unclosed parenthesis", vec!["')'"]);
                }
                Some(inner)
            }
            TokenKind::LBracket => Some(self.parse_list_literal(span)),
            TokenKind::LBrace => Some(self.parse_dict_literal(span)),
            _ => None,
        }
    }

    /// Parses `[a, b, ...]`.
    fn parse_list_literal(&mut self, start: Span) -> Expression {
        self.advance(); // `[`
        let mut elements = Vec::new();
        while self.current_token().kind != TokenKind::RBracket && !self.at_eof() {
            if let Some(element) = self.parse_expression() {
                elements.push(element);
            } else {
                self.error_at_current("expected list element", vec!["expression"]);
                break;
            }
            if self.current_token().kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        if self.current_token().kind == TokenKind::RBracket {
            self.advance();
        } else {
            self.error_at_current("unclosed list literal", vec!["']'"]);
        }
        Expression::List {
            elements,
            span: start.merge(self.last_span()),
        }
    }

    /// Parses `{key: value, ...}`. Keys and values are kept as parallel
    /// lists, in source order.
    fn parse_dict_literal(&mut self, start: Span) -> Expression {
        self.advance(); // `{`
        let mut keys = Vec::new();
        let mut values = Vec::new();
        while self.current_token().kind != TokenKind::RBrace && !self.at_eof() {
            let Some(key) = self.parse_expression() else {
                self.error_at_current("expected dict key", vec!["expression"]);
                break;
            };
            if self.current_token().kind == TokenKind::Colon {
                self.advance();
            } else {
                self.error_at_current("expected ':' after dict key", vec!["':'"]);
            }
            let value = self.parse_expression_or_recover();
            keys.push(key);
            values.push(value);
            if self.current_token().kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        if self.current_token().kind == TokenKind::RBrace {
            self.advance();
        } else {
            self.error_at_current("unclosed dict literal", vec!["'}'"]);
        }
        Expression::Dict {
            keys,
            values,
            span: start.merge(self.last_span()),
        }
    }

    /// Returns true if the current token is an operator in `ops`.
    fn current_is_operator_in(&self, ops: &[&str]) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Operator && ops.contains(&token.text.as_str())
    }
}
