//! Inline term highlighter
//!
//! Wraps notable terms in emphasis markers. Four pattern classes are applied
//! in a fixed order:
//!
//! 1. technology and domain nouns (case-insensitive)
//! 2. analytical and business nouns (case-insensitive)
//! 3. percentages, 4-digit years, currency amounts, grouped integers
//! 4. emphasis adjectives (case-insensitive)
//!
//! In [`HighlightMode::Sequential`] each pattern runs over the output of the
//! previous one, so a later class may wrap text an earlier class already
//! wrapped. [`HighlightMode::NonOverlapping`] resolves matches on an interval
//! set instead: earlier classes win and covered ranges are never re-wrapped.

use once_cell::sync::Lazy;
use proseframe_ast::{Block, Document, HighlightSpan, TermClass};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::emphasis;

static TECHNOLOGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(artificial intelligence|AI|machine learning|ML|deep learning|neural networks|blockchain|cryptocurrency|cybersecurity|automation|robotics|quantum computing|data science|big data|IoT|5G|cloud computing)\b",
    )
    .unwrap()
});

static BUSINESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(research|study|analysis|innovation|development|strategy|solution|technology|performance|efficiency|results|findings|conclusion)\b",
    )
    .unwrap()
});

static STATISTIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+%|\b\d{4}\b|\$[\d,]+|\b\d+(?:,\d{3})*\b").unwrap());

static EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(important|significant|critical|essential|major|key|primary|fundamental|crucial|advanced|comprehensive)\b",
    )
    .unwrap()
});

/// How overlapping matches from different pattern classes are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightMode {
    /// Apply patterns one after another over the rewritten string
    #[default]
    Sequential,
    /// First-match-wins over a span set; no range is wrapped twice
    NonOverlapping,
}

/// Pattern classes in application order
fn patterns() -> [(TermClass, &'static Regex); 4] {
    [
        (TermClass::Technology, &*TECHNOLOGY),
        (TermClass::Business, &*BUSINESS),
        (TermClass::Statistic, &*STATISTIC),
        (TermClass::Emphasis, &*EMPHASIS),
    ]
}

/// Inline term highlighter
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter {
    mode: HighlightMode,
}

impl Highlighter {
    pub fn new(mode: HighlightMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> HighlightMode {
        self.mode
    }

    /// Wrap every matched term in emphasis markers
    ///
    /// Text without any vocabulary match is returned unchanged.
    pub fn highlight(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.mode {
            HighlightMode::Sequential => highlight_sequential(text),
            HighlightMode::NonOverlapping => apply_spans(text, &self.spans(text)),
        }
    }

    /// Non-overlapping highlight spans over `text`, sorted by start
    ///
    /// Earlier pattern classes take precedence; a later match touching any
    /// covered byte is discarded.
    pub fn spans(&self, text: &str) -> Vec<HighlightSpan> {
        let mut spans: Vec<HighlightSpan> = Vec::new();
        for (class, pattern) in patterns() {
            for m in pattern.find_iter(text) {
                let candidate = HighlightSpan::new(m.start(), m.end(), class);
                if candidate.is_empty() || spans.iter().any(|s| s.overlaps(&candidate)) {
                    continue;
                }
                spans.push(candidate);
            }
        }
        spans.sort_by_key(|s| s.start);
        spans
    }

    /// Highlight every text fragment of a block; the variant is unchanged
    pub fn highlight_block(&self, block: Block) -> Block {
        block.map_text(|text| self.highlight(text))
    }

    /// Highlight every block of a document; metadata passes through
    pub fn highlight_document(&self, document: Document) -> Document {
        let Document {
            blocks,
            summary,
            keywords,
        } = document;
        Document {
            blocks: blocks
                .into_iter()
                .map(|block| self.highlight_block(block))
                .collect(),
            summary,
            keywords,
        }
    }
}

/// Highlight with the default sequential mode
pub fn highlight(text: &str) -> String {
    Highlighter::default().highlight(text)
}

fn highlight_sequential(text: &str) -> String {
    let replacement = format!("{}$0{}", emphasis::OPEN, emphasis::CLOSE);
    let mut result = text.to_string();
    for (_, pattern) in patterns() {
        result = pattern.replace_all(&result, replacement.as_str()).into_owned();
    }
    result
}

fn apply_spans(text: &str, spans: &[HighlightSpan]) -> String {
    let mut result = String::with_capacity(text.len() + spans.len() * (emphasis::OPEN.len() + emphasis::CLOSE.len()));
    let mut cursor = 0;
    for span in spans {
        result.push_str(&text[cursor..span.start]);
        result.push_str(&emphasis::wrap(span.slice(text)));
        cursor = span.end;
    }
    result.push_str(&text[cursor..]);
    result
}
