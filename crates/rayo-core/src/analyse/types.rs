// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The analyser's type lattice and bottom-up inference.
//!
//! Types are deliberately coarse: three basic types, an optional wrapper for
//! values that may be `None`, and `Any` as the sound fallback for everything
//! that is not a literal (names, calls, operators, attributes, indexing).

use std::fmt;

use crate::ast::{Expression, Literal};

/// A basic, non-nullable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicType {
    Int,
    Str,
    Bool,
}

/// An inferred type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A known basic type.
    Basic(BasicType),
    /// A value that may be `None`; dereferencing it without a check is
    /// reported by the analyser.
    Optional(Box<Type>),
    /// Unknown; the analyser assumes nothing about it.
    Any,
}

impl Type {
    /// Whether this type admits `None`.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, Type::Optional(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(BasicType::Int) => write!(f, "int"),
            Type::Basic(BasicType::Str) => write!(f, "str"),
            Type::Basic(BasicType::Bool) => write!(f, "bool"),
            Type::Optional(inner) => write!(f, "{inner}?"),
            Type::Any => write!(f, "any"),
        }
    }
}

/// Infers an expression's type, without consulting any scope.
///
/// Literals map directly; a bare `None` literal is `Optional(Any)`.
/// Everything else, operators included, is `Any` — the lint passes key on
/// that fallback, so inference must not see through compound expressions.
#[must_use]
pub fn infer_type(expr: &Expression) -> Type {
    match expr {
        Expression::Literal(literal, _) => match literal {
            Literal::Int(_) => Type::Basic(BasicType::Int),
            Literal::Str(_) => Type::Basic(BasicType::Str),
            Literal::Bool(_) => Type::Basic(BasicType::Bool),
            Literal::None => Type::Optional(Box::new(Type::Any)),
        },
        _ => Type::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{lex_with_eof, parse};

    fn infer(source: &str) -> Type {
        let (module, diagnostics) = parse(lex_with_eof(source));
        assert!(diagnostics.is_empty(), "diagnostics: {diagnostics:?}");
        match &module.body[0] {
            crate::ast::Statement::Expr { expr, .. } => infer_type(expr),
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn literal_types() {
        assert_eq!(infer("42"), Type::Basic(BasicType::Int));
        assert_eq!(infer("'hi'"), Type::Basic(BasicType::Str));
        assert_eq!(infer("true"), Type::Basic(BasicType::Bool));
        assert!(infer("None").is_optional());
    }

    #[test]
    fn operators_are_any() {
        // Inference stops at literals; compound expressions stay dynamic
        // even when every operand is a known literal.
        assert_eq!(infer("1 < 2"), Type::Any);
        assert_eq!(infer("1 + 2"), Type::Any);
        assert_eq!(infer("!x"), Type::Any);
        assert_eq!(infer("-1"), Type::Any);
    }

    #[test]
    fn opaque_expressions_are_any() {
        assert_eq!(infer("f(1)"), Type::Any);
        assert_eq!(infer("a.b"), Type::Any);
        assert_eq!(infer("xs[0]"), Type::Any);
    }

    #[test]
    fn display_renders_optional_suffix() {
        assert_eq!(Type::Optional(Box::new(Type::Any)).to_string(), "any?");
        assert_eq!(Type::Basic(BasicType::Str).to_string(), "str");
    }
}
