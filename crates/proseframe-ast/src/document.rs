//! Document root and metadata definitions
//!
//! A [`Document`] is the sole artifact passed to the renderers. It owns the
//! classified block sequence plus the summary and keyword metadata that the
//! generation backend returns alongside the prose.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A complete structured document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Classified blocks in reading order
    pub blocks: Vec<Block>,
    /// Optional summary text, rendered after the main content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Keywords in display order
    #[serde(default, skip_serializing_if = "Keywords::is_empty")]
    pub keywords: Keywords,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a block sequence
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Default::default()
        }
    }

    /// Attach a summary; blank summaries are treated as absent
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.summary = if summary.trim().is_empty() {
            None
        } else {
            Some(summary)
        };
        self
    }

    /// Attach keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().collect();
        self
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// The title text, if the first block is a title
    pub fn title(&self) -> Option<&str> {
        match self.blocks.first() {
            Some(Block::Title(text)) => Some(text),
            _ => None,
        }
    }

    /// Check whether a summary or any keywords are attached
    pub fn has_metadata(&self) -> bool {
        self.summary.is_some() || !self.keywords.is_empty()
    }
}

/// An insertion-ordered keyword set
///
/// Duplicates are ignored on insert; the first occurrence keeps its
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Create an empty keyword set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword, returning `false` if it was blank or already present
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into().trim().to_string();
        if keyword.is_empty() || self.0.contains(&keyword) {
            return false;
        }
        self.0.push(keyword);
        true
    }

    /// Iterate keywords in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join keywords with a separator
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keywords = Keywords::new();
        for keyword in iter {
            keywords.insert(keyword);
        }
        keywords
    }
}
