//! proseframe-core - Structure for unstructured prose
//!
//! Core library for proseframe: a heuristic structurer that turns
//! machine-generated prose into a typed block sequence.
//!
//! # Pipeline
//!
//! 1. [`normalize`] - strips escaped newlines, blank-line runs and leaked
//!    markdown
//! 2. [`segment`] - cuts the text into [`Section`]s on blank lines
//! 3. [`classify`] - types each section as title, heading, list or paragraph
//! 4. [`Highlighter`] - wraps notable terms in emphasis markers
//!
//! # Example
//!
//! ```
//! use proseframe_ast::BlockKind;
//! use proseframe_core::structure;
//!
//! let doc = structure("Why Rust?\n\nIt is fast and safe.\n\n- memory safety\n- speed");
//! let kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind()).collect();
//! assert_eq!(kinds, [BlockKind::Title, BlockKind::Paragraph, BlockKind::List]);
//! ```

pub mod classifier;
pub mod diagnostics;
pub mod emphasis;
pub mod error;
pub mod highlighter;
pub mod normalizer;
pub mod payload;
pub mod pipeline;
pub mod segmenter;
pub mod sequence;

// Re-export main types and functions
pub use classifier::{classify, Classifier, HEADING_MAX_WORDS, TITLE_MAX_WORDS};
pub use error::{CoreError, Result};
pub use highlighter::{highlight, HighlightMode, Highlighter};
pub use normalizer::normalize;
pub use payload::{GenerationRequest, GenerationResponse};
pub use pipeline::{classify_text, structure, Structurer};
pub use segmenter::{segment, Section};
pub use sequence::{DocumentSlot, RequestSequencer, Ticket};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
