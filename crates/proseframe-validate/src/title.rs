//! Title placement validator
//!
//! A document has at most one title, and only as its first block.

use proseframe_ast::{Block, Document};
use proseframe_core::diagnostics::{Diagnostic, Location};

use crate::Validator;

/// Validates title count and position
///
/// # Diagnostic Codes
///
/// - `DOC201`: title not at index 0, or more than one title
///
/// # Example
///
/// ```
/// use proseframe_ast::{Block, Document};
/// use proseframe_validate::{TitlePlacementValidator, Validator};
///
/// let doc = Document::from_blocks(vec![
///     Block::Title("Only title".into()),
///     Block::Paragraph("Body.".into()),
/// ]);
/// assert!(TitlePlacementValidator.validate(&doc).is_empty());
/// ```
pub struct TitlePlacementValidator;

impl Validator for TitlePlacementValidator {
    fn code(&self) -> &'static str {
        "DOC2"
    }

    fn name(&self) -> &'static str {
        "title-placement"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let titles: Vec<usize> = doc
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| matches!(block, Block::Title(_)))
            .map(|(index, _)| index)
            .collect();

        let mut diagnostics = Vec::new();
        for (nth, &index) in titles.iter().enumerate() {
            let message = if nth > 0 {
                format!(
                    "Extra title at block {} (document already has a title at block {})",
                    index, titles[0]
                )
            } else if index != 0 {
                format!("Title at block {} is not the first block", index)
            } else {
                continue;
            };

            diagnostics.push(
                Diagnostic::error(message)
                    .with_code("DOC201")
                    .with_location(Location::block(index))
                    .with_help(
                        "A document has at most one title, and it opens the document. \
                         Turn later titles into headings.",
                    ),
            );
        }
        diagnostics
    }
}
