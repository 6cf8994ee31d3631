//! PDF serialisation
//!
//! Writes a [`PagedDocument`] with the built-in Helvetica faces, so no font
//! files are needed. Each line is drawn at its baseline, converted from
//! top-left to PDF's bottom-left origin.

use std::path::Path;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::{PageError, Result};
use crate::geometry::FontWeight;
use crate::paged::{Page, PagedDocument};

const LAYER: &str = "Content";
const UNTITLED: &str = "Untitled";

/// Serialises paginated documents to PDF bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialise `doc` to PDF bytes
    ///
    /// A document with no pages still produces a single blank page.
    pub fn write(&self, doc: &PagedDocument) -> Result<Vec<u8>> {
        let width = Mm(doc.width_mm);
        let height = Mm(doc.height_mm);
        let title = doc.title.as_deref().unwrap_or(UNTITLED);

        let (pdf, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER);
        let regular = pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PageError::Pdf(format!("{:?}", e)))?;
        let bold = pdf
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PageError::Pdf(format!("{:?}", e)))?;

        let mut target = (first_page, first_layer);
        for (i, page) in doc.pages.iter().enumerate() {
            if i > 0 {
                target = pdf.add_page(width, height, LAYER);
            }
            let layer = pdf.get_page(target.0).get_layer(target.1);
            write_page(&layer, page, doc.height_mm, &regular, &bold);
        }

        let bytes = pdf
            .save_to_bytes()
            .map_err(|e| PageError::Pdf(format!("{:?}", e)))?;
        tracing::debug!(pages = doc.page_count(), bytes = bytes.len(), "wrote pdf");
        Ok(bytes)
    }

    /// Serialise `doc` and write it to `path`
    pub fn write_to_file(&self, doc: &PagedDocument, path: &Path) -> Result<()> {
        let bytes = self.write(doc)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn write_page(
    layer: &PdfLayerReference,
    page: &Page,
    page_height: f32,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for line in &page.lines {
        let (r, g, b) = line.color.unit();
        layer.set_fill_color(Color::Rgb(printpdf::Rgb::new(r, g, b, None)));
        let font = match line.weight {
            FontWeight::Normal => regular,
            FontWeight::Bold => bold,
        };
        layer.use_text(
            line.text.as_str(),
            line.font_size,
            Mm(line.x),
            Mm(page_height - line.baseline()),
            font,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageRenderer;
    use proseframe_ast::{Block, Document};
    use proseframe_render::Renderer;

    #[test]
    fn test_write_pdf_header() {
        let doc = Document::from_blocks(vec![
            Block::Title("Hello".into()),
            Block::Paragraph("This is a test document.".into()),
        ]);
        let paged = PageRenderer::a4().render(&doc);
        let bytes = PdfWriter::new().write(&paged).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "Output doesn't start with PDF header");
    }

    #[test]
    fn test_write_empty_document() {
        let paged = PageRenderer::a4().render(&Document::new());
        let bytes = PdfWriter::new().write(&paged).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let paged = PageRenderer::a4().render(&Document::from_blocks(vec![Block::Heading(
            "Saved".into(),
        )]));
        PdfWriter::new().write_to_file(&paged, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
