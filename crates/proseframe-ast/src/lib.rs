//! proseframe-ast - Document model
//!
//! This crate provides the types shared by every stage of the proseframe
//! pipeline: the classified [`Block`] sequence, the [`Document`] that carries
//! it together with summary and keyword metadata, and the advisory
//! [`HighlightSpan`] annotation.

pub mod block;
pub mod document;
pub mod span;

pub use block::{Block, BlockKind};
pub use document::{Document, Keywords};
pub use span::{HighlightSpan, TermClass};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
