//! The structuring pipeline
//!
//! normalize → segment → classify → highlight, producing a [`Document`].
//! Every stage is a pure transform; a [`Structurer`] holds no state between
//! documents and can be shared freely across threads.

use proseframe_ast::{Block, Document};

use crate::classifier::classify;
use crate::highlighter::{HighlightMode, Highlighter};
use crate::normalizer::normalize;
use crate::payload::GenerationResponse;
use crate::segmenter::segment;

/// Runs the full pipeline with a fixed highlight mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Structurer {
    highlighter: Highlighter,
}

impl Structurer {
    pub fn new(mode: HighlightMode) -> Self {
        Self {
            highlighter: Highlighter::new(mode),
        }
    }

    /// Structure raw text into a highlighted document without metadata
    pub fn structure(&self, raw: &str) -> Document {
        let blocks = classify_text(raw);
        let document = self.highlighter.highlight_document(Document::from_blocks(blocks));
        tracing::debug!(
            blocks = document.len(),
            titled = document.title().is_some(),
            "structured document"
        );
        document
    }

    /// Structure a backend response, attaching its summary and keywords
    pub fn structure_response(&self, response: &GenerationResponse) -> Document {
        self.structure(&response.blog_content)
            .with_summary(response.summary.as_str())
            .with_keywords(response.keywords.iter().map(String::as_str))
    }
}

/// Classify raw text without highlighting
pub fn classify_text(raw: &str) -> Vec<Block> {
    classify(segment(&normalize(raw)))
}

/// Structure raw text with the default highlight mode
pub fn structure(raw: &str) -> Document {
    Structurer::default().structure(raw)
}
