//! proseframe-render - Document renderers
//!
//! This crate renders a classified [`Document`] into text encodings:
//!
//! - [`HtmlRenderer`] - styled markup for on-screen display
//! - [`PlainRenderer`] - markdown-flavoured plain text for download and copy
//!
//! Both implement [`Renderer`], as does the paginated renderer in
//! `proseframe-page`. Every renderer consumes the same block sequence and
//! appends the summary and keywords after the main content.
//!
//! # Example
//!
//! ```
//! use proseframe_core::structure;
//! use proseframe_render::{PlainRenderer, Renderer};
//!
//! let doc = structure("Why Rust?\n\nIt is fast.");
//! let text = PlainRenderer.render(&doc);
//! assert_eq!(text, "# Why Rust?\n\nIt is fast.\n");
//! ```

pub mod html;
pub mod plain;

use proseframe_ast::Document;

pub use html::{HtmlRenderer, HtmlStyle};
pub use plain::{strip_markup, PlainRenderer};

/// A serializer from a [`Document`] into one output encoding
///
/// Rendering is total: malformed or empty documents still produce a valid
/// (possibly empty) artifact.
pub trait Renderer {
    /// The artifact this renderer produces
    type Output;

    /// Short name of the encoding (e.g., "html")
    fn name(&self) -> &'static str;

    /// Render the document
    fn render(&self, doc: &Document) -> Self::Output;
}
