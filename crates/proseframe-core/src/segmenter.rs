//! Section segmenter
//!
//! Splits normalized text into [`Section`]s on blank-line boundaries. Order
//! is the document's reading order and is never changed downstream.

use once_cell::sync::Lazy;
use regex::Regex;

/// A blank line, possibly holding stray whitespace
static SECTION_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// `1.`, `12.` followed by whitespace or end of line
static NUMBERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.(?:\s+|$)").unwrap());

/// Characters that open a bulleted line
pub const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// The kind of list marker that opens a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `•`
    Bullet(char),
    /// `digits.`
    Numbered,
}

/// Detect the list marker opening `line`, ignoring leading whitespace
pub fn list_marker(line: &str) -> Option<ListMarker> {
    let line = line.trim_start();
    match line.chars().next() {
        Some(c) if BULLET_MARKERS.contains(&c) => Some(ListMarker::Bullet(c)),
        Some(c) if c.is_ascii_digit() && NUMBERED_MARKER.is_match(line) => {
            Some(ListMarker::Numbered)
        }
        _ => None,
    }
}

/// Strip one leading list marker and the whitespace after it
pub fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    match list_marker(line) {
        Some(ListMarker::Bullet(c)) => line[c.len_utf8()..].trim_start(),
        Some(ListMarker::Numbered) => match NUMBERED_MARKER.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        },
        None => line,
    }
}

/// A contiguous run of non-blank lines
///
/// Sections are independent copies of the text they were cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    text: String,
    line_count: usize,
    word_count: usize,
    trailing: Option<char>,
    leading_marker: Option<ListMarker>,
}

impl Section {
    /// Build a section from its text, trimming surrounding whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        let line_count = text.lines().filter(|l| !l.trim().is_empty()).count();
        let word_count = text.split_whitespace().count();
        let trailing = text.chars().last().filter(|c| c.is_ascii_punctuation());
        let leading_marker = list_marker(&text);

        Self {
            text,
            line_count,
            word_count,
            trailing,
            leading_marker,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the section, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of non-blank lines
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The final character, if it is ASCII punctuation
    pub fn trailing_punctuation(&self) -> Option<char> {
        self.trailing
    }

    pub fn ends_with_period(&self) -> bool {
        self.trailing == Some('.')
    }

    /// The list marker opening the first line, if any
    pub fn leading_marker(&self) -> Option<ListMarker> {
        self.leading_marker
    }

    pub fn starts_with_marker(&self) -> bool {
        self.leading_marker.is_some()
    }

    /// Check whether any line after the first opens with a list marker
    pub fn has_embedded_marker(&self) -> bool {
        self.text.lines().skip(1).any(|l| list_marker(l).is_some())
    }

    pub fn contains(&self, c: char) -> bool {
        self.text.contains(c)
    }

    /// Non-blank lines, trimmed
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Split text into sections on blank lines.
///
/// Empty and whitespace-only segments are dropped.
pub fn segment(text: &str) -> Vec<Section> {
    let sections: Vec<Section> = SECTION_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .map(Section::new)
        .collect();

    tracing::debug!(sections = sections.len(), "segmented text");
    sections
}
