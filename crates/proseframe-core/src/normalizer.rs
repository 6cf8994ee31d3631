//! Text normalizer
//!
//! Generated prose is nominally plain text but routinely carries escaped
//! newlines, runs of blank lines and leaked markdown. The normalizer reduces
//! all of that to plain lines separated by the canonical section separator
//! (exactly one blank line).
//!
//! # Example
//!
//! ```
//! use proseframe_core::normalize;
//!
//! let text = normalize("## Intro\\n\\n\\n\\nSee **this** [link](https://x.y).");
//! assert_eq!(text, "Intro\n\nSee this link.");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::emphasis::MARKER_CHARS;

/// Fenced code blocks, removed with their content
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Leftover backticks from inline code spans or unterminated fences
static BACKTICKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"`+").unwrap());

/// ATX heading markers at the start of a line
static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}(?:[ \t]+|$)").unwrap());

/// Bold / bold-italic asterisk runs
static ASTERISK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{2,}").unwrap());

/// `[label](url)` links
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\([^)\n]*\)").unwrap());

static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw generated text.
///
/// Total over all strings; the empty string normalizes to itself. The result
/// is a fixed point: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    // Every pass either leaves the text untouched or makes it strictly
    // shorter, so this converges.
    let mut current = normalize_pass(raw);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.replace("\\n", "\n").replace(MARKER_CHARS, "");
    let text = CODE_FENCE.replace_all(&text, "");
    let text = BACKTICKS.replace_all(&text, "");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = ASTERISK_RUN.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = TRAILING_WHITESPACE.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
