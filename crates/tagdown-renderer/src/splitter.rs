//! Code region splitting.
//!
//! Partitions a document into code and non-code segments so that custom tags
//! are only expanded outside fenced code blocks and `<pre>` regions.

use std::sync::LazyLock;

use regex::Regex;

/// Fenced block (triple backticks) or literal `<pre>` region, both lazy and
/// spanning lines. A construct without its closing delimiter never matches.
static CODE_REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```|<pre>.*?</pre>").unwrap());

/// A contiguous slice of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any code region; custom tags are expanded here.
    Text(&'a str),
    /// A code region including its delimiters, emitted verbatim.
    Code(&'a str),
}

impl<'a> Segment<'a> {
    /// The original text of this segment.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Text(s) | Self::Code(s) => s,
        }
    }

    /// Whether this segment is a code region.
    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }
}

/// Split `text` into alternating text and code segments.
///
/// Concatenating the segments in order reproduces `text` exactly. Code
/// segments are never empty; empty text segments are not emitted.
///
/// # Example
///
/// ```
/// use tagdown_renderer::{Segment, split_code_regions};
///
/// let segments = split_code_regions("a<pre>b</pre>c");
/// assert_eq!(
///     segments,
///     vec![Segment::Text("a"), Segment::Code("<pre>b</pre>"), Segment::Text("c")]
/// );
/// ```
#[must_use]
pub fn split_code_regions(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for m in CODE_REGION_RE.find_iter(text) {
        if m.start() > last_end {
            segments.push(Segment::Text(&text[last_end..m.start()]));
        }
        segments.push(Segment::Code(m.as_str()));
        last_end = m.end();
    }

    if last_end < text.len() {
        segments.push(Segment::Text(&text[last_end..]));
    }

    segments
}
