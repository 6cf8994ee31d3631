//! Paginated layout
//!
//! Lays out each block's wrapped lines top to bottom from a starting cursor.
//! Before a line is placed the cursor is checked against the bottom margin;
//! if the line would cross it, the line moves to a fresh page. A line is
//! never split across pages. The summary and keywords follow all blocks as a
//! fixed labelled section.

use proseframe_ast::{Block, Document};
use proseframe_render::{strip_markup, Renderer};

use crate::error::Result;
use crate::geometry::{FontWeight, PageGeometry, PageStyle, Rgb};
use crate::paged::{Page, PagedDocument, PlacedLine};

/// Font and colour for one text run
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f32,
    weight: FontWeight,
    color: Rgb,
}

/// Renders documents into fixed pages
#[derive(Debug, Clone)]
pub struct PageRenderer {
    geometry: PageGeometry,
    style: PageStyle,
    start_y: f32,
}

impl PageRenderer {
    /// Create a renderer, rejecting geometry that cannot hold a line
    pub fn new(geometry: PageGeometry, style: PageStyle) -> Result<Self> {
        geometry.validate(&style)?;
        Ok(Self {
            start_y: geometry.margin_mm,
            geometry,
            style,
        })
    }

    /// A4 pages with the default style
    pub fn a4() -> Self {
        Self {
            geometry: PageGeometry::A4,
            style: PageStyle::default(),
            start_y: PageGeometry::A4.margin_mm,
        }
    }

    /// Start the first page at `y` mm instead of the top margin
    pub fn with_start(mut self, y: f32) -> Self {
        self.start_y = if y.is_finite() { y.max(0.0) } else { self.geometry.margin_mm };
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    fn lay_out_block(&self, block: &Block, cursor: &mut Cursor<'_>) {
        let s = &self.style;
        let bold = |size| TextStyle {
            size,
            weight: FontWeight::Bold,
            color: s.content_color,
        };
        let body = TextStyle {
            size: s.fonts.body,
            weight: FontWeight::Normal,
            color: s.content_color,
        };

        match block {
            Block::Title(text) => {
                cursor.add_text(&strip_markup(text), bold(s.fonts.title));
                cursor.gap(s.heading_gap_mm);
            }
            Block::Heading(text) => {
                cursor.add_text(&strip_markup(text), bold(s.fonts.heading));
                cursor.gap(s.heading_gap_mm);
            }
            Block::List(items) => {
                for item in items {
                    let item = strip_markup(item);
                    if item.is_empty() {
                        continue;
                    }
                    cursor.add_text(&format!("{}{}", s.bullet, item), body);
                }
                cursor.gap(s.paragraph_gap_mm);
            }
            Block::Paragraph(text) => {
                cursor.add_text(&strip_markup(text), body);
                cursor.gap(s.paragraph_gap_mm);
            }
        }
    }

    fn lay_out_metadata(&self, doc: &Document, cursor: &mut Cursor<'_>) {
        let s = &self.style;
        let label = TextStyle {
            size: s.fonts.label,
            weight: FontWeight::Bold,
            color: s.label_color,
        };
        let meta = TextStyle {
            size: s.fonts.meta,
            weight: FontWeight::Normal,
            color: s.meta_color,
        };

        if let Some(ref summary) = doc.summary {
            cursor.gap(s.metadata_gap_mm);
            cursor.add_text("Summary", label);
            cursor.add_text(&strip_markup(summary), meta);
        }
        if !doc.keywords.is_empty() {
            cursor.gap(s.metadata_gap_mm);
            cursor.add_text("Keywords", label);
            cursor.add_text(&doc.keywords.join(", "), meta);
        }
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::a4()
    }
}

impl Renderer for PageRenderer {
    type Output = PagedDocument;

    fn name(&self) -> &'static str {
        "page"
    }

    fn render(&self, doc: &Document) -> PagedDocument {
        let mut cursor = Cursor::new(&self.geometry, &self.style, self.start_y);
        for block in &doc.blocks {
            if block.is_blank() {
                continue;
            }
            self.lay_out_block(block, &mut cursor);
        }
        self.lay_out_metadata(doc, &mut cursor);

        let pages = cursor.finish();
        tracing::debug!(
            blocks = doc.len(),
            pages = pages.len(),
            "laid out pages"
        );
        PagedDocument {
            title: doc.title().map(strip_markup),
            width_mm: self.geometry.width_mm,
            height_mm: self.geometry.height_mm,
            pages,
        }
    }
}

/// Layout state: finished pages, the open page and the vertical cursor
struct Cursor<'a> {
    geometry: &'a PageGeometry,
    style: &'a PageStyle,
    done: Vec<Page>,
    page: Page,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(geometry: &'a PageGeometry, style: &'a PageStyle, start_y: f32) -> Self {
        Self {
            geometry,
            style,
            done: Vec::new(),
            page: Page::new(1),
            y: start_y,
        }
    }

    /// Wrap `text` to the content width and place each line
    fn add_text(&mut self, text: &str, run: TextStyle) {
        let width = self
            .style
            .chars_per_line(self.geometry.content_width(), run.size);
        let line_height = self.style.line_height(run.size);

        for line in wrap(text, width) {
            if self.y + line_height > self.geometry.content_bottom() {
                self.next_page();
            }
            self.page.lines.push(PlacedLine {
                x: self.geometry.margin_mm,
                y: self.y,
                text: line,
                font_size: run.size,
                weight: run.weight,
                color: run.color,
            });
            self.y += line_height;
        }
        self.y += self.style.text_gap_mm;
    }

    /// Advance the cursor; the next placed line decides whether to break
    fn gap(&mut self, mm: f32) {
        self.y += mm;
    }

    fn next_page(&mut self) {
        if !self.page.is_empty() {
            let number = self.page.number + 1;
            let full = std::mem::replace(&mut self.page, Page::new(number));
            self.done.push(full);
        }
        self.y = self.geometry.margin_mm;
    }

    /// Close the open page; an empty document still yields one blank page
    fn finish(mut self) -> Vec<Page> {
        if !self.page.is_empty() || self.done.is_empty() {
            self.done.push(self.page);
        }
        self.done
    }
}

/// Greedy word wrap to at most `max_chars` characters per line
///
/// Words longer than a line are split at the character limit.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        if word_len > max_chars {
            tracing::warn!(word_len, max_chars, "splitting word wider than a line");
        }
        while word_len > max_chars {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let split = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
            word_len -= max_chars;
        }
        if word_len == 0 {
            continue;
        }

        if line_len == 0 {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= max_chars {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}
