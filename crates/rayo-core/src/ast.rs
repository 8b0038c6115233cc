// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Rayo.
//!
//! The AST represents the structure of a Rayo program after parsing. Every
//! node carries a [`Span`] for error reporting.
//!
//! # Design Philosophy
//!
//! - **Sum types, exhaustive matches** — statements and expressions are
//!   enums; the visitor, analyzer, and generator all match exhaustively, so
//!   adding a variant fails to compile until every consumer is updated.
//! - **Strict tree ownership** — a [`Module`] owns its imports and statements;
//!   each node exclusively owns its children. No sharing, no cycles.
//!
//! # Example
//!
//! ```ignore
//! // Source: var x = 42
//! Module {
//!     imports: vec![],
//!     body: vec![Statement::VarDecl {
//!         name: "x".into(),
//!         value: Expression::Literal(Literal::Int(42), ...),
//!         span: ...,
//!     }],
//!     ...
//! }
//! ```

use ecow::EcoString;

use crate::source_analysis::Span;

/// The AST root for one source file: ordered imports plus ordered top-level
/// statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Module name (set by the resolver from the file stem; empty for
    /// anonymous parses).
    pub name: EcoString,
    /// Import declarations, in source order.
    pub imports: Vec<Import>,
    /// Top-level statements, in source order.
    pub body: Vec<Statement>,
    /// Source location spanning the entire module.
    pub span: Span,
}

impl Module {
    /// Creates a new anonymous module.
    #[must_use]
    pub fn new(imports: Vec<Import>, body: Vec<Statement>, span: Span) -> Self {
        Self {
            name: EcoString::new(),
            imports,
            body,
            span,
        }
    }
}

/// An `import 'path'` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The import path with quotes stripped.
    pub path: EcoString,
    /// Source location of the declaration.
    pub span: Span,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: EcoString,
    /// Source location of the parameter.
    pub span: Span,
}

/// An `elif` branch of an [`Statement::If`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElifBranch {
    /// Branch condition.
    pub condition: Expression,
    /// Branch body.
    pub body: Vec<Statement>,
    /// Source location of the branch.
    pub span: Span,
}

/// An `except` handler of a [`Statement::Try`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptHandler {
    /// Optional name binding for the caught value.
    pub name: Option<EcoString>,
    /// Handler body.
    pub body: Vec<Statement>,
    /// Source location of the handler.
    pub span: Span,
}

/// A Rayo statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `var name = value` declaration.
    VarDecl {
        /// The declared name.
        name: EcoString,
        /// The initializer expression.
        value: Expression,
        /// Source location of the whole declaration.
        span: Span,
    },

    /// An assignment to an existing target: `target = value`.
    Assign {
        /// The assignment target (a name, index, or attribute expression).
        target: Expression,
        /// The assigned value.
        value: Expression,
        /// Source location of the whole assignment.
        span: Span,
    },

    /// An `if` statement with optional `elif` chain and `else` block.
    If {
        /// The `if` condition.
        condition: Expression,
        /// The `then` block.
        then_body: Vec<Statement>,
        /// Zero or more `elif` branches.
        elifs: Vec<ElifBranch>,
        /// The `else` block (empty if absent).
        else_body: Vec<Statement>,
        /// Source location of the whole statement.
        span: Span,
    },

    /// A `while cond { ... }` loop.
    While {
        /// Loop condition.
        condition: Expression,
        /// Loop body.
        body: Vec<Statement>,
        /// Source location of the whole loop.
        span: Span,
    },

    /// A `for name in expr { ... }` loop.
    For {
        /// The loop variable.
        var: EcoString,
        /// The iterated expression.
        iter: Expression,
        /// Loop body.
        body: Vec<Statement>,
        /// Source location of the whole loop.
        span: Span,
    },

    /// A `return` statement with optional value.
    Return {
        /// The returned expression, if any.
        value: Option<Expression>,
        /// Source location of the statement.
        span: Span,
    },

    /// A `try { } except { } finally { }` statement.
    Try {
        /// The protected body.
        body: Vec<Statement>,
        /// Zero or more `except` handlers.
        handlers: Vec<ExceptHandler>,
        /// The `finally` block (empty if absent).
        finally: Vec<Statement>,
        /// Source location of the whole statement.
        span: Span,
    },

    /// A bare expression in statement position.
    Expr {
        /// The expression.
        expr: Expression,
        /// Source location of the statement.
        span: Span,
    },

    /// A `def name() { ... }` function definition.
    FuncDef {
        /// The function name.
        name: EcoString,
        /// Declared parameters.
        params: Vec<Param>,
        /// Function body.
        body: Vec<Statement>,
        /// Source location of the whole definition.
        span: Span,
    },
}

impl Statement {
    /// The source span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Statement::VarDecl { span, .. }
            | Statement::Assign { span, .. }
            | Statement::If { span, .. }
            | Statement::While { span, .. }
            | Statement::For { span, .. }
            | Statement::Return { span, .. }
            | Statement::Try { span, .. }
            | Statement::Expr { span, .. }
            | Statement::FuncDef { span, .. } => *span,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// An integer literal.
    Int(i64),
    /// A string literal (quotes stripped).
    Str(EcoString),
    /// A boolean literal.
    Bool(bool),
    /// The `None` literal.
    None,
}

/// A Rayo expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal value.
    Literal(Literal, Span),

    /// A name reference.
    Name {
        /// The referenced name.
        name: EcoString,
        /// Source location.
        span: Span,
    },

    /// A call: `callee(args...)`.
    Call {
        /// The called expression.
        callee: Box<Expression>,
        /// Call arguments.
        args: Vec<Expression>,
        /// Source location of the whole call.
        span: Span,
    },

    /// An index access: `target[index]`.
    Index {
        /// The indexed expression.
        target: Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
        /// Source location of the whole access.
        span: Span,
    },

    /// An attribute access: `target.name`.
    Attribute {
        /// The accessed expression.
        target: Box<Expression>,
        /// The attribute name.
        name: EcoString,
        /// Source location of the whole access.
        span: Span,
    },

    /// A unary operation: `!x`, `-x`.
    Unary {
        /// The operator text.
        op: EcoString,
        /// The operand.
        operand: Box<Expression>,
        /// Source location of the whole operation.
        span: Span,
    },

    /// A binary operation: `a + b`, `a == b`.
    Binary {
        /// The operator text.
        op: EcoString,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location of the whole operation.
        span: Span,
    },

    /// A dict literal: `{k: v, ...}`. Keys and values are parallel lists.
    Dict {
        /// Key expressions.
        keys: Vec<Expression>,
        /// Value expressions (same length as `keys`).
        values: Vec<Expression>,
        /// Source location of the literal.
        span: Span,
    },

    /// A list literal: `[a, b, ...]`.
    List {
        /// Element expressions.
        elements: Vec<Expression>,
        /// Source location of the literal.
        span: Span,
    },

    /// A lambda expression. No surface syntax produces one yet; the variant
    /// exists so tooling can represent functions-as-values.
    Lambda {
        /// Declared parameters.
        params: Vec<Param>,
        /// The body expression.
        body: Box<Expression>,
        /// Source location of the lambda.
        span: Span,
    },
}

impl Expression {
    /// The source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Expression::Literal(_, span) => *span,
            Expression::Name { span, .. }
            | Expression::Call { span, .. }
            | Expression::Index { span, .. }
            | Expression::Attribute { span, .. }
            | Expression::Unary { span, .. }
            | Expression::Binary { span, .. }
            | Expression::Dict { span, .. }
            | Expression::List { span, .. }
            | Expression::Lambda { span, .. } => *span,
        }
    }

    /// Returns the name if this expression is a bare name reference.
    #[must_use]
    pub fn as_name(&self) -> Option<&EcoString> {
        match self {
            Expression::Name { name, .. } => Some(name),
            _ => None,
        }
    }
}
