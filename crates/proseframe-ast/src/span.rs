//! Highlight annotations
//!
//! A [`HighlightSpan`] marks a byte range of block text that the highlighter
//! considers worth emphasising. Spans are advisory: they never change block
//! boundaries or types.

use serde::{Deserialize, Serialize};

/// The vocabulary or pattern family a highlighted term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermClass {
    /// Technology and domain nouns
    Technology,
    /// Analytical and business nouns
    Business,
    /// Percentages, years, currency amounts and grouped integers
    Statistic,
    /// Emphasis adjectives
    Emphasis,
}

/// A highlighted byte range `[start, end)` over a block's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub class: TermClass,
}

impl HighlightSpan {
    pub fn new(start: usize, end: usize, class: TermClass) -> Self {
        Self { start, end, class }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two spans share at least one byte
    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slice the annotated text out of `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}
