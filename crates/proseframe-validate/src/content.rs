//! Empty content validator

use proseframe_ast::{Block, Document};
use proseframe_core::diagnostics::{Diagnostic, Location};

use crate::Validator;

/// Flags blocks that would render as nothing
///
/// # Diagnostic Codes
///
/// - `DOC202`: block with blank text, list without items, blank list item
pub struct EmptyContentValidator;

impl Validator for EmptyContentValidator {
    fn code(&self) -> &'static str {
        "DOC2"
    }

    fn name(&self) -> &'static str {
        "empty-content"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, block) in doc.blocks.iter().enumerate() {
            match block {
                Block::List(items) if items.is_empty() => {
                    diagnostics.push(empty(
                        "List has no items".to_string(),
                        Location::block(index),
                    ));
                }
                Block::List(items) => {
                    for (item, text) in items.iter().enumerate() {
                        if text.trim().is_empty() {
                            diagnostics.push(empty(
                                format!("List item {} is blank", item + 1),
                                Location::item(index, item),
                            ));
                        }
                    }
                }
                other if other.is_blank() => {
                    diagnostics.push(empty(
                        format!("Empty {} block", other.kind()),
                        Location::block(index),
                    ));
                }
                _ => {}
            }
        }

        diagnostics
    }
}

fn empty(message: String, location: Location) -> Diagnostic {
    Diagnostic::warning(message)
        .with_code("DOC202")
        .with_location(location)
        .with_help("Remove the block or give it text.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_blocks() {
        let doc = Document::from_blocks(vec![
            Block::Heading("Heading".into()),
            Block::List(vec!["a".into()]),
        ]);
        assert!(EmptyContentValidator.validate(&doc).is_empty());
    }

    #[test]
    fn test_blank_paragraph() {
        let doc = Document::from_blocks(vec![Block::Paragraph("  \t".into())]);
        let diagnostics = EmptyContentValidator.validate(&doc);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_warning());
        assert_eq!(diagnostics[0].message, "Empty paragraph block");
    }

    #[test]
    fn test_empty_list() {
        let doc = Document::from_blocks(vec![Block::List(vec![])]);
        let diagnostics = EmptyContentValidator.validate(&doc);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "List has no items");
    }

    #[test]
    fn test_blank_list_items() {
        let doc = Document::from_blocks(vec![
            Block::Paragraph("Intro.".into()),
            Block::List(vec!["a".into(), "".into(), " ".into()]),
        ]);
        let diagnostics = EmptyContentValidator.validate(&doc);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].location, Some(Location::item(1, 1)));
        assert_eq!(diagnostics[1].location, Some(Location::item(1, 2)));
    }
}
