// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and AST node carries a [`Span`] indicating its position in the
//! source file. Positions track byte offset, line, and column so diagnostics
//! can point at exact source locations without re-scanning the file.

/// A single position in a source file.
///
/// Lines and columns are 1-based; the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePos {
    /// Byte offset from the start of the file.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SourcePos {
    /// Creates a new source position.
    #[must_use]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The start of a file: offset 0, line 1, column 1.
    #[must_use]
    pub const fn start_of_file() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::start_of_file()
    }
}

/// A span of source code, from a start position to an end position (exclusive).
///
/// Spans are used throughout the compiler to track the source location of
/// tokens, AST nodes, and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position (inclusive).
    pub start: SourcePos,
    /// End position (exclusive).
    pub end: SourcePos,
}

impl Span {
    /// Creates a new span from start and end positions.
    #[must_use]
    pub const fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at a single position.
    #[must_use]
    pub const fn at(pos: SourcePos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.offset - self.start.offset
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns true if `other` is fully contained within `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// Creates a span that covers both `self` and `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start.offset < other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset > other.end.offset {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.offset as usize, span.len() as usize).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_empty() {
        let span = Span::new(SourcePos::new(5, 1, 6), SourcePos::new(15, 1, 16));
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());

        let empty = Span::at(SourcePos::new(5, 1, 6));
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn span_merge_takes_extremes() {
        let a = Span::new(SourcePos::new(5, 1, 6), SourcePos::new(10, 1, 11));
        let b = Span::new(SourcePos::new(15, 2, 3), SourcePos::new(20, 2, 8));
        let merged = a.merge(b);
        assert_eq!(merged.start.offset, 5);
        assert_eq!(merged.end.offset, 20);
        assert_eq!(merged.end.line, 2);
    }

    #[test]
    fn span_contains() {
        let outer = Span::new(SourcePos::new(0, 1, 1), SourcePos::new(20, 1, 21));
        let inner = Span::new(SourcePos::new(5, 1, 6), SourcePos::new(10, 1, 11));
        assert!(outer.contains(inner));
        assert!(!inner.contains(outer));
    }

    #[test]
    fn span_to_miette_source_span() {
        let span = Span::new(SourcePos::new(10, 2, 1), SourcePos::new(15, 2, 6));
        let ms: miette::SourceSpan = span.into();
        assert_eq!(ms.offset(), 10);
        assert_eq!(ms.len(), 5);
    }
}
