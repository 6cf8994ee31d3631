//! HTML renderer
//!
//! Maps each block to a styled container with inline styles, so the markup
//! can be dropped into any page without a stylesheet. Styling comes from an
//! [`HtmlStyle`] owned by the renderer; rendering touches no shared state and
//! the same document always yields byte-identical markup.

use proseframe_ast::{Block, Document};
use proseframe_core::emphasis;
use serde::{Deserialize, Serialize};

use crate::Renderer;

/// Style context for HTML output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlStyle {
    /// Maximum width of the document container in pixels
    pub max_width_px: u32,
    /// Font stack for all text
    pub font_family: String,
    /// Accent colour for rules, bullets and emphasis
    pub accent: String,
    /// Title text colour
    pub title_color: String,
    /// Heading and body text colour
    pub text_color: String,
    /// Colour for summary and keyword text
    pub muted_color: String,
    /// Base font size in pixels
    pub font_size_px: u32,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        Self {
            max_width_px: 800,
            font_family: "'Georgia', serif".to_string(),
            accent: "#667eea".to_string(),
            title_color: "#1a202c".to_string(),
            text_color: "#2d3748".to_string(),
            muted_color: "#718096".to_string(),
            font_size_px: 16,
        }
    }
}

/// Renders documents to an HTML fragment
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    style: HtmlStyle,
}

impl HtmlRenderer {
    pub fn new(style: HtmlStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &HtmlStyle {
        &self.style
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        let s = &self.style;
        match block {
            Block::Title(text) => {
                out.push_str(&format!(
                    "<h1 style=\"font-size: {}px; font-weight: 700; margin: 30px 0 25px 0; \
                     text-align: center; color: {}; border-bottom: 3px solid {}; \
                     padding-bottom: 15px; font-family: {}; line-height: 1.3;\">{}</h1>\n",
                    s.font_size_px * 2,
                    s.title_color,
                    s.accent,
                    s.font_family,
                    self.inline(text)
                ));
            }
            Block::Heading(text) => {
                out.push_str(&format!(
                    "<h2 style=\"font-size: {}px; font-weight: 600; margin: 30px 0 15px 0; \
                     color: {}; border-left: 5px solid {}; padding: 10px 0 10px 20px; \
                     font-family: {}; line-height: 1.4;\">{}</h2>\n",
                    s.font_size_px * 3 / 2,
                    s.text_color,
                    s.accent,
                    s.font_family,
                    self.inline(text)
                ));
            }
            Block::List(items) => {
                out.push_str("<ul style=\"margin: 20px 0; padding-left: 0; list-style: none;\">\n");
                for item in items {
                    out.push_str(&format!(
                        "<li style=\"margin: 12px 0; padding-left: 20px; position: relative; \
                         line-height: 1.6; font-size: {}px; font-family: {}; color: {}; \
                         border-left: 2px solid #e2e8f0;\"><span style=\"position: absolute; \
                         left: -5px; top: 8px; width: 8px; height: 8px; background: {}; \
                         border-radius: 50%;\"></span>{}</li>\n",
                        s.font_size_px,
                        s.font_family,
                        s.text_color,
                        s.accent,
                        self.inline(item)
                    ));
                }
                out.push_str("</ul>\n");
            }
            Block::Paragraph(text) => {
                out.push_str(&format!(
                    "<p style=\"margin: 20px 0; line-height: 1.8; font-size: {}px; \
                     text-align: justify; font-family: {}; color: {};\">{}</p>\n",
                    s.font_size_px, s.font_family, s.text_color,
                    self.inline(text)
                ));
            }
        }
    }

    fn render_metadata(&self, doc: &Document, out: &mut String) {
        if !doc.has_metadata() {
            return;
        }
        let s = &self.style;
        out.push_str(&format!(
            "<section style=\"margin-top: 40px; padding-top: 20px; border-top: 1px solid #e2e8f0; \
             font-family: {};\">\n",
            s.font_family
        ));
        if let Some(ref summary) = doc.summary {
            out.push_str(&format!(
                "<h3 style=\"color: {};\">Summary</h3>\n\
                 <p style=\"font-style: italic; color: {};\">{}</p>\n",
                s.text_color,
                s.muted_color,
                html_escape(&emphasis::strip(summary))
            ));
        }
        if !doc.keywords.is_empty() {
            out.push_str(&format!("<h3 style=\"color: {};\">Keywords</h3>\n<div>", s.text_color));
            for keyword in doc.keywords.iter() {
                out.push_str(&format!(
                    "<span style=\"display: inline-block; margin: 0 8px 8px 0; padding: 4px 12px; \
                     border: 1px solid {}; border-radius: 16px; color: {};\">{}</span>",
                    s.accent,
                    s.accent,
                    html_escape(keyword)
                ));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
    }

    /// Escape text and turn emphasis markers into styled spans
    fn inline(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in emphasis::segments(text) {
            let escaped = html_escape(segment.text);
            if segment.emphasized {
                out.push_str(&format!(
                    "<strong style=\"font-weight: 700; color: {};\">{}</strong>",
                    self.style.title_color, escaped
                ));
            } else {
                out.push_str(&escaped);
            }
        }
        out
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, doc: &Document) -> String {
        let mut out = format!(
            "<div style=\"max-width: {}px; margin: 0 auto; padding: 20px;\">\n",
            self.style.max_width_px
        );
        for block in &doc.blocks {
            self.render_block(block, &mut out);
        }
        self.render_metadata(doc, &mut out);
        out.push_str("</div>\n");

        tracing::debug!(blocks = doc.len(), bytes = out.len(), "rendered html");
        out
    }
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(doc: &Document) -> String {
        HtmlRenderer::default().render(doc)
    }

    #[test]
    fn test_empty_document_is_valid() {
        let html = render(&Document::new());
        assert!(html.starts_with("<div"));
        assert!(html.trim_end().ends_with("</div>"));
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_block_mapping() {
        let doc = Document::from_blocks(vec![
            Block::Title("Title".into()),
            Block::Heading("Heading".into()),
            Block::List(vec!["one".into(), "two".into()]),
            Block::Paragraph("Body.".into()),
        ]);
        let html = render(&doc);
        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<h2").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
        assert_eq!(html.matches("<p").count(), 1);
        let h1 = html.find("<h1").unwrap();
        let h2 = html.find("<h2").unwrap();
        let ul = html.find("<ul").unwrap();
        let p = html.find("<p").unwrap();
        assert!(h1 < h2 && h2 < ul && ul < p);
    }

    #[test]
    fn test_emphasis_and_escaping() {
        let doc = Document::from_blocks(vec![Block::Paragraph(format!(
            "R&D in {} <script>",
            emphasis::wrap("AI")
        ))]);
        let html = render(&doc);
        assert!(html.contains("R&amp;D in <strong style="));
        assert!(html.contains(">AI</strong>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_metadata_after_content() {
        let doc = Document::from_blocks(vec![Block::Paragraph("Body.".into())])
            .with_summary("A short summary")
            .with_keywords(["rust", "docs"]);
        let html = render(&doc);
        let body = html.find("Body.").unwrap();
        let summary = html.find("A short summary").unwrap();
        let keywords = html.find(">rust</span>").unwrap();
        assert!(body < summary && summary < keywords);
    }

    #[test]
    fn test_deterministic() {
        let doc = Document::from_blocks(vec![Block::Heading("Same".into())]).with_summary("S");
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_style_context_is_per_renderer() {
        let dark = HtmlRenderer::new(HtmlStyle {
            accent: "#ff0000".to_string(),
            ..Default::default()
        });
        let doc = Document::from_blocks(vec![Block::Heading("H".into())]);
        assert!(dark.render(&doc).contains("#ff0000"));
        assert!(!render(&doc).contains("#ff0000"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"q\""), "&quot;q&quot;");
    }
}
