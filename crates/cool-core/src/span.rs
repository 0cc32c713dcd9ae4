//! Source positions for diagnostics.
//!
//! The parser stamps every AST node with a span. Semantic diagnostics
//! report at line granularity, so positions carry only line and column.

use serde::{Deserialize, Serialize};

/// A line/column position in a source file. Both are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A region of source text, from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Creates a single-line span, the granularity Cool diagnostics report at.
    #[must_use]
    pub const fn at_line(line: usize) -> Self {
        Self {
            start: Location::new(line, 1),
            end: Location::new(line, 1),
        }
    }
}
