//! proseframe-page - Paginated layout and PDF output
//!
//! This crate lays out a classified [`Document`](proseframe_ast::Document)
//! on fixed-size pages and serialises the result to PDF.
//!
//! # Architecture
//!
//! The page pipeline has two stages:
//!
//! 1. **Layout** - [`PageRenderer`] wraps each block to the content width
//!    and places lines top to bottom, producing a [`PagedDocument`]
//! 2. **Serialise** - [`PdfWriter`] turns the paged layout into PDF bytes
//!
//! # Example
//!
//! ```
//! use proseframe_core::structure;
//! use proseframe_page::{PageRenderer, PdfWriter};
//! use proseframe_render::Renderer;
//!
//! let doc = structure("Why Rust?\n\nIt is fast and safe.");
//! let paged = PageRenderer::a4().render(&doc);
//! assert_eq!(paged.to_text(), "Why Rust?\nIt is fast and safe.\n");
//!
//! let pdf = PdfWriter::new().write(&paged)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), proseframe_page::PageError>(())
//! ```

mod error;
pub mod geometry;
pub mod layout;
pub mod paged;
pub mod pdf;

pub use error::{PageError, Result};
pub use geometry::{FontSizes, FontWeight, PageGeometry, PageStyle, Rgb};
pub use layout::{wrap, PageRenderer};
pub use paged::{Page, PagedDocument, PlacedLine};
pub use pdf::PdfWriter;

/// Render a document on A4 pages and serialise it to PDF
pub fn render_pdf(doc: &proseframe_ast::Document) -> Result<Vec<u8>> {
    use proseframe_render::Renderer;

    PdfWriter::new().write(&PageRenderer::a4().render(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _ = render_pdf;
        let _ = PdfWriter::write;
        let _ = PagedDocument::to_text;
    }
}
