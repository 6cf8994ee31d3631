//! Metadata validator

use proseframe_ast::Document;
use proseframe_core::diagnostics::Diagnostic;

use crate::Validator;

/// Notes documents without a summary or keywords
///
/// # Diagnostic Codes
///
/// - `DOC203`: summary and/or keywords missing (informational)
pub struct MetadataValidator;

impl Validator for MetadataValidator {
    fn code(&self) -> &'static str {
        "DOC2"
    }

    fn name(&self) -> &'static str {
        "metadata"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let missing: Vec<&str> = [
            (doc.summary.is_none(), "summary"),
            (doc.keywords.is_empty(), "keywords"),
        ]
        .into_iter()
        .filter_map(|(absent, what)| absent.then_some(what))
        .collect();

        if missing.is_empty() {
            return Vec::new();
        }
        vec![Diagnostic::info(format!("Document has no {}", missing.join(" or ")))
            .with_code("DOC203")
            .with_help("Renderers omit the Summary and Keywords sections when they are empty.")]
    }
}
