// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic rendering using miette.
//!
//! Converts rayo-core diagnostics into miette-formatted reports with source
//! context, an arrow at the offending span, and the parser's expected-token
//! hints when present.

use miette::{Diagnostic, SourceSpan};
use rayo_core::source_analysis::{Diagnostic as CoreDiagnostic, Severity};

/// A compilation diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(rayo::compile))]
pub struct CompileDiagnostic {
    /// Error, warning, or lint finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Source code for context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the finding.
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the span (interpolated by the miette derive macro).
    pub label: String,
    /// Suggested fix or expected-token list, when the core diagnostic
    /// carries one.
    #[help]
    pub help: Option<String>,
}

impl CompileDiagnostic {
    /// Create a renderable diagnostic from a rayo-core diagnostic.
    pub fn from_core_diagnostic(
        diagnostic: &CoreDiagnostic,
        source_path: &str,
        source: &str,
    ) -> Self {
        let label = match diagnostic.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
            Severity::Lint => "lint finding here",
        };

        let help = if let Some(hint) = &diagnostic.hint {
            Some(hint.to_string())
        } else if diagnostic.expected.is_empty() {
            None
        } else {
            Some(format!("expected {}", diagnostic.expected.join(" or ")))
        };

        Self {
            severity: diagnostic.severity,
            message: diagnostic.message.to_string(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: diagnostic.span.into(),
            label: label.to_string(),
            help,
        }
    }
}

/// Renders a batch of core diagnostics to stderr.
pub fn report_all(diagnostics: &[CoreDiagnostic], source_path: &str, source: &str) {
    for diagnostic in diagnostics {
        let report = miette::Report::new(CompileDiagnostic::from_core_diagnostic(
            diagnostic,
            source_path,
            source,
        ));
        eprintln!("{report:?}");
    }
}
