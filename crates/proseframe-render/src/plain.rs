//! Plain-text / markdown renderer
//!
//! Produces the text used for "download as text" and "copy to clipboard".
//! Emphasis markers are stripped; any other text, tags included, is kept. The title gets a single `#`
//! marker, headings `##`, list items `-`, and blocks are separated by one
//! blank line, so normalizing and classifying the output reproduces the
//! same block sequence.

use proseframe_ast::{Block, Document};
use proseframe_core::emphasis;

use crate::Renderer;

/// Renders documents to markdown-flavoured plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    fn render_block(block: &Block) -> String {
        match block {
            Block::Title(text) => format!("# {}", strip_markup(text)),
            Block::Heading(text) => format!("## {}", strip_markup(text)),
            Block::List(items) => items
                .iter()
                .map(|item| format!("- {}", strip_markup(item)))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Paragraph(text) => strip_markup(text),
        }
    }
}

impl Renderer for PlainRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, doc: &Document) -> String {
        let mut parts: Vec<String> = doc
            .blocks
            .iter()
            .map(Self::render_block)
            .filter(|part| !part.trim().is_empty())
            .collect();

        if let Some(ref summary) = doc.summary {
            parts.push("## Summary".to_string());
            parts.push(strip_markup(summary));
        }
        if !doc.keywords.is_empty() {
            parts.push("## Keywords".to_string());
            parts.push(doc.keywords.join(", "));
        }

        if parts.is_empty() {
            return String::new();
        }
        let mut out = parts.join("\n\n");
        out.push('\n');
        out
    }
}

/// Drop emphasis markers
pub fn strip_markup(text: &str) -> String {
    emphasis::strip(text).trim().to_string()
}
