//! proseframe-validate - Document structure checks
//!
//! The classifier guarantees a few structural properties (at most one title,
//! and only at the start; no empty blocks). Documents built by hand or
//! decoded from elsewhere may not hold them. This crate checks a
//! [`Document`] and reports what it finds as diagnostics.
//!
//! # Architecture
//!
//! Individual validators implement the [`Validator`] trait. The
//! [`ValidationEngine`] runs every registered validator and collects the
//! diagnostics in registration order.
//!
//! # Example
//!
//! ```
//! use proseframe_ast::{Block, Document};
//! use proseframe_validate::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let doc = Document::from_blocks(vec![
//!     Block::Paragraph("Opening.".into()),
//!     Block::Title("Late title".into()),
//! ]);
//! assert!(engine.has_errors(&doc));
//! ```

pub mod content;
pub mod metadata;
pub mod title;

use proseframe_ast::Document;
use proseframe_core::diagnostics::Diagnostic;

pub use content::EmptyContentValidator;
pub use metadata::MetadataValidator;
pub use title::TitlePlacementValidator;

/// Trait for document validators
///
/// Each validator has a unique code prefix for its diagnostics.
pub trait Validator: Send + Sync {
    /// The validator's code prefix (e.g., "DOC2")
    fn code(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the document and return any diagnostics
    fn validate(&self, doc: &Document) -> Vec<Diagnostic>;
}

/// Runs a set of validators over documents
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine with no validators
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with the title, content and metadata validators
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(TitlePlacementValidator));
        engine.add_validator(Box::new(EmptyContentValidator));
        engine.add_validator(Box::new(MetadataValidator));
        engine
    }

    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate a document using all registered validators
    pub fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        self.validators
            .iter()
            .flat_map(|validator| validator.validate(doc))
            .collect()
    }

    /// Check if a document has any errors
    pub fn has_errors(&self, doc: &Document) -> bool {
        self.validate(doc).iter().any(|d| d.is_error())
    }

    /// Check if a document has any diagnostics at all
    pub fn has_issues(&self, doc: &Document) -> bool {
        !self.validate(doc).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
