//! Emphasis markers
//!
//! The highlighter wraps terms in [`OPEN`] / [`CLOSE`]. Renderers use
//! [`segments`] to split marked text into plain and emphasised runs, or
//! [`strip`] to drop the markers. Nested markers are tolerated: a run is
//! emphasised while at least one marker is open.
//!
//! The markers are private-use code points. [`normalize`](crate::normalize)
//! removes them from raw input, so literal text such as `<strong>` is never
//! mistaken for emphasis.

/// Opening emphasis marker
pub const OPEN: &str = "\u{E000}";

/// Closing emphasis marker
pub const CLOSE: &str = "\u{E001}";

/// Both marker characters
pub const MARKER_CHARS: [char; 2] = ['\u{E000}', '\u{E001}'];

/// A run of text with uniform emphasis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Wrap `text` in emphasis markers
pub fn wrap(text: &str) -> String {
    format!("{OPEN}{text}{CLOSE}")
}

/// Split marked text into runs; empty runs are omitted
///
/// Unbalanced closing markers are ignored.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut depth: usize = 0;
    let mut rest = text;

    loop {
        let next = [rest.find(OPEN), rest.find(CLOSE)]
            .into_iter()
            .flatten()
            .min();

        let Some(pos) = next else {
            push_segment(&mut result, rest, depth > 0);
            break;
        };

        push_segment(&mut result, &rest[..pos], depth > 0);
        if rest[pos..].starts_with(OPEN) {
            depth += 1;
            rest = &rest[pos + OPEN.len()..];
        } else {
            depth = depth.saturating_sub(1);
            rest = &rest[pos + CLOSE.len()..];
        }
    }

    result
}

fn push_segment<'a>(out: &mut Vec<Segment<'a>>, text: &'a str, emphasized: bool) {
    if !text.is_empty() {
        out.push(Segment { text, emphasized });
    }
}

/// Remove every emphasis marker
pub fn strip(text: &str) -> String {
    segments(text).into_iter().map(|s| s.text).collect()
}

/// Check whether `text` carries any emphasis marker
pub fn has_markers(text: &str) -> bool {
    text.contains(OPEN) || text.contains(CLOSE)
}
