//! Block-level elements for document structure
//!
//! A block is the unit the classifier emits for each section of the input:
//! a title, a section heading, a list, or a paragraph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A classified block of document content
///
/// Blocks are immutable once created. Text may carry emphasis markers
/// inserted by the highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Block {
    /// The document title (at most one, always first)
    Title(String),
    /// A section heading
    Heading(String),
    /// A list block, one entry per item with its marker stripped
    List(Vec<String>),
    /// A paragraph of running text
    Paragraph(String),
}

/// The variant of a block, without its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Heading,
    List,
    Paragraph,
}

impl Block {
    /// Get the variant of this block
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Title(_) => BlockKind::Title,
            Block::Heading(_) => BlockKind::Heading,
            Block::List(_) => BlockKind::List,
            Block::Paragraph(_) => BlockKind::Paragraph,
        }
    }

    /// Check if this block is the document title
    pub fn is_title(&self) -> bool {
        matches!(self, Block::Title(_))
    }

    /// Text fragments of this block, one per list item for lists
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Block::Title(text) | Block::Heading(text) | Block::Paragraph(text) => {
                vec![text.as_str()]
            }
            Block::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Check if the block carries no visible text
    pub fn is_blank(&self) -> bool {
        self.texts().iter().all(|t| t.trim().is_empty())
    }

    /// Rebuild the block with every text fragment passed through `f`
    ///
    /// The variant and the number of list items are preserved.
    pub fn map_text<F>(self, mut f: F) -> Block
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Block::Title(text) => Block::Title(f(&text)),
            Block::Heading(text) => Block::Heading(f(&text)),
            Block::List(items) => Block::List(items.iter().map(|item| f(item)).collect()),
            Block::Paragraph(text) => Block::Paragraph(f(&text)),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Title => "title",
            BlockKind::Heading => "heading",
            BlockKind::List => "list",
            BlockKind::Paragraph => "paragraph",
        };
        f.write_str(name)
    }
}
