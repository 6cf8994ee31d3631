//! Section classifier
//!
//! Assigns each [`Section`] exactly one [`Block`] variant using ordered,
//! first-match-wins heuristics:
//!
//! 1. **Title** - only the first section, never one opening with a list
//!    marker, and only if it holds a `?` or is at most [`TITLE_MAX_WORDS`]
//!    words without a closing period.
//! 2. **Heading** - at most [`HEADING_MAX_WORDS`] words, no closing period,
//!    no leading list marker.
//! 3. **List** - opens with a list marker or holds an embedded marker line.
//! 4. **Paragraph** - everything else, lines joined with single spaces.
//!
//! # Example
//!
//! ```
//! use proseframe_ast::Block;
//! use proseframe_core::{classify, segment};
//!
//! let blocks = classify(segment("Why Rust?\n\n- fast\n- safe"));
//! assert_eq!(blocks[0], Block::Title("Why Rust?".to_string()));
//! assert_eq!(blocks[1], Block::List(vec!["fast".to_string(), "safe".to_string()]));
//! ```

use proseframe_ast::Block;

use crate::segmenter::{strip_list_marker, Section};

/// Upper word bound for an untitled first section to become the title
pub const TITLE_MAX_WORDS: usize = 8;

/// Upper word bound for a heading
pub const HEADING_MAX_WORDS: usize = 15;

/// Classifier state machine over a section sequence
#[derive(Debug, Default)]
pub struct Classifier {
    /// Whether a title has been emitted
    title_assigned: bool,
    /// Sections seen so far
    seen: usize,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next section in reading order
    pub fn classify_section(&mut self, section: Section) -> Block {
        let first = self.seen == 0;
        self.seen += 1;

        if first && !self.title_assigned && Self::is_title(&section) {
            self.title_assigned = true;
            return Block::Title(join_lines(&section));
        }

        if Self::is_heading(&section) {
            return Block::Heading(join_lines(&section));
        }

        if Self::is_list(&section) {
            return Block::List(list_items(&section));
        }

        Block::Paragraph(join_lines(&section))
    }

    fn is_title(section: &Section) -> bool {
        if section.starts_with_marker() {
            return false;
        }
        section.contains('?')
            || (section.word_count() <= TITLE_MAX_WORDS && !section.ends_with_period())
    }

    fn is_heading(section: &Section) -> bool {
        section.word_count() <= HEADING_MAX_WORDS
            && !section.ends_with_period()
            && !section.starts_with_marker()
    }

    fn is_list(section: &Section) -> bool {
        section.starts_with_marker() || section.has_embedded_marker()
    }
}

/// Classify a section sequence, preserving order one block per section
pub fn classify(sections: Vec<Section>) -> Vec<Block> {
    let mut classifier = Classifier::new();
    let blocks: Vec<Block> = sections
        .into_iter()
        .map(|section| classifier.classify_section(section))
        .collect();

    tracing::debug!(blocks = blocks.len(), "classified sections");
    blocks
}

fn join_lines(section: &Section) -> String {
    section.lines().collect::<Vec<_>>().join(" ")
}

/// One item per non-blank line; marker-less lines are kept as-is
fn list_items(section: &Section) -> Vec<String> {
    section
        .lines()
        .map(strip_list_marker)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
