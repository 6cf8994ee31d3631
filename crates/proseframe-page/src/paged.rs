//! The paginated artifact

use serde::Serialize;

use crate::geometry::{FontWeight, Rgb, MM_PER_PT};

/// Distance from the top of a line box to the baseline, in ems
const BASELINE_EM: f32 = 0.8;

/// One line of text at a fixed position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    /// Left edge, mm from the page's left side
    pub x: f32,
    /// Top of the line box, mm from the page top
    pub y: f32,
    pub text: String,
    /// Point size
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
}

impl PlacedLine {
    /// Baseline, mm from the page top
    ///
    /// Sits one ascent below [`y`](Self::y), inside the line box.
    pub fn baseline(&self) -> f32 {
        self.y + self.font_size * MM_PER_PT * BASELINE_EM
    }
}

/// A single page, numbered from 1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined top to bottom
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

/// Fixed paginated layout of a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedDocument {
    /// Document title with markup removed, used as PDF metadata
    pub title: Option<String>,
    pub width_mm: f32,
    pub height_mm: f32,
    pub pages: Vec<Page>,
}

impl PagedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All placed lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    /// Plain-text layout with pages separated by a form feed
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::text)
            .collect::<Vec<_>>()
            .join("\u{c}")
    }
}
