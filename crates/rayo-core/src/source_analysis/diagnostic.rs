// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Accumulated diagnostics.
//!
//! Parse errors and semantic warnings are never thrown as control flow; they
//! accumulate in `Vec<Diagnostic>` lists owned by the parser or analysis
//! pass. The module resolver is the first layer that turns "this file had
//! parse errors" into a hard failure.

use ecow::EcoString;

use super::Span;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An error that makes the build fail at the resolver boundary.
    Error,
    /// An advisory finding that never fails the build.
    Warning,
    /// A style finding with a suggested fix, reported by `rayo`'s lint tooling.
    Lint,
}

/// A diagnostic message (parse error, semantic warning, or lint finding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: Severity,
    /// The message text.
    pub message: EcoString,
    /// The source location.
    pub span: Span,
    /// Descriptions of the tokens that would have been valid here
    /// (parse errors only).
    pub expected: Vec<&'static str>,
    /// The offending source excerpt (parse errors only).
    pub excerpt: EcoString,
    /// A suggested fix (lint findings only).
    pub hint: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<EcoString>, span: Span) -> Self {
        Self::new(Severity::Error, message, span)
    }

    /// Creates a new warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<EcoString>, span: Span) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    /// Creates a new lint diagnostic.
    #[must_use]
    pub fn lint(message: impl Into<EcoString>, span: Span) -> Self {
        Self::new(Severity::Lint, message, span)
    }

    fn new(severity: Severity, message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity,
            message: message.into(),
            span,
            expected: Vec::new(),
            excerpt: EcoString::new(),
            hint: None,
        }
    }

    /// Attaches the set of expected token descriptions.
    #[must_use]
    pub fn with_expected(mut self, expected: Vec<&'static str>) -> Self {
        self.expected = expected;
        self
    }

    /// Attaches the offending source excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<EcoString>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Attaches a suggested fix.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Returns true if this diagnostic fails the build.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.start.line, self.span.start.column, self.message
        )?;
        if !self.expected.is_empty() {
            write!(f, " (expected {})", self.expected.join(" or "))?;
        }
        if !self.excerpt.is_empty() {
            write!(f, " near '{}'", self.excerpt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::SourcePos;

    #[test]
    fn display_includes_position_expected_and_excerpt() {
        let span = Span::new(SourcePos::new(4, 2, 1), SourcePos::new(5, 2, 2));
        let diag = Diagnostic::error("unexpected token", span)
            .with_expected(vec!["'{'"])
            .with_excerpt(")");
        assert_eq!(diag.to_string(), "2:1: unexpected token (expected '{') near ')'");
    }

    #[test]
    fn severity_predicates() {
        let span = Span::default();
        assert!(Diagnostic::error("e", span).is_error());
        assert!(!Diagnostic::warning("w", span).is_error());
        assert!(!Diagnostic::lint("l", span).is_error());
    }
}
