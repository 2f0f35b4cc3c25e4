//! Inline markdown span extraction for error messages.
//!
//! Defines [`InlineSpan`], [`SpanKind`], and the compiled regex accessors
//! used for inline markup (code, bold, italic). The main export is
//! [`extract_inline_spans`], which performs a multi-pass greedy parse of a
//! text string and returns non-overlapping spans sorted by start position.
//! The panel maps spans to styled segments with the markers stripped.
//!
//! Backslash-escaped markers (`` \` ``, `\*`, `\_`) are claimed by a
//! pre-pass, so they render as the literal character and never open a span.

use regex::Regex;
use std::sync::OnceLock;


// ---------------------------------------------------------------------------
// Compiled inline regexes
// ---------------------------------------------------------------------------

fn re_escaped_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\([`*_])")
            .expect("re_escaped_marker: pattern is valid and should always compile")
    })
}

fn re_inline_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"`([^`]+)`")
            .expect("re_inline_code: pattern is valid and should always compile")
    })
}

fn re_bold_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*\*(.+?)\*\*\*|___(.+?)___")
            .expect("re_bold_italic: pattern is valid and should always compile")
    })
}

fn re_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*|__(.+?)__")
            .expect("re_bold: pattern is valid and should always compile")
    })
}

fn re_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Use \b around underscore italic to avoid matching snake_case identifiers.
    RE.get_or_init(|| {
        Regex::new(r"\*([^*]+)\*|\b_([^_]+)_\b")
            .expect("re_italic: pattern is valid and should always compile")
    })
}

// ---------------------------------------------------------------------------
// Inline span types
// ---------------------------------------------------------------------------

/// A byte range of the source text carrying one kind of inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

/// The markup carried by a span. Payloads hold the content with the
/// markers already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// A backslash-escaped marker rendering as the literal character.
    Escaped(String),
    /// Backtick code span.
    Code(String),
    /// Triple-marker bold italic.
    BoldItalic(String),
    /// Double-marker bold.
    Bold(String),
    /// Single-marker italic.
    Italic(String),
}

impl SpanKind {
    /// The text to display for this span, markers stripped.
    pub fn content(&self) -> &str {
        match self {
            SpanKind::Escaped(s)
            | SpanKind::Code(s)
            | SpanKind::BoldItalic(s)
            | SpanKind::Bold(s)
            | SpanKind::Italic(s) => s,
        }
    }
}

// ---------------------------------------------------------------------------
// Occupancy helpers
// ---------------------------------------------------------------------------

fn any_occupied(occupied: &[bool], start: usize, end: usize) -> bool {
    occupied[start..end].iter().any(|&b| b)
}

fn mark_occupied(occupied: &mut [bool], start: usize, end: usize) {
    for b in &mut occupied[start..end] {
        *b = true;
    }
}

fn find_in_unoccupied(text: &str, re: &Regex, occupied: &[bool]) -> Vec<(usize, usize)> {
    let mut results = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        if occupied[pos] {
            pos += 1;
            continue;
        }
        if let Some(m) = re.find_at(text, pos) {
            if !any_occupied(occupied, m.start(), m.end()) {
                results.push((m.start(), m.end()));
                pos = m.end();
            } else {
                pos = m.start() + 1;
            }
        } else {
            break;
        }
    }
    results
}

/// Capture group 1 (or 2, for the underscore alternative) of a fresh match
/// of `re` at `start`.
fn captured_content(text: &str, re: &Regex, start: usize) -> String {
    let caps = re
        .captures(&text[start..])
        .expect("regex matched this range and should always capture");
    caps.get(1)
        .or_else(|| caps.get(2))
        .expect("matched regex must populate capture group 1 or 2")
        .as_str()
        .to_string()
}

// ---------------------------------------------------------------------------
// Main extraction function
// ---------------------------------------------------------------------------

/// Extract all inline markup spans from `text`, returning them sorted by
/// start position. Each byte range in the returned spans is non-overlapping;
/// escaped markers are claimed first, then code spans, and both prevent
/// other markup from matching within them.
pub fn extract_inline_spans(text: &str) -> Vec<InlineSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut occupied = vec![false; text.len()];
    let mut spans = Vec::new();

    // Pass 1: Escaped markers (highest priority, render literally)
    for (start, end) in find_in_unoccupied(text, re_escaped_marker(), &occupied) {
        let content = captured_content(text, re_escaped_marker(), start);
        mark_occupied(&mut occupied, start, end);
        spans.push(InlineSpan {
            start,
            end,
            kind: SpanKind::Escaped(content),
        });
    }

    // Pass 2: Code spans (opaque to emphasis passes)
    for (start, end) in find_in_unoccupied(text, re_inline_code(), &occupied) {
        let content = captured_content(text, re_inline_code(), start);
        mark_occupied(&mut occupied, start, end);
        spans.push(InlineSpan {
            start,
            end,
            kind: SpanKind::Code(content),
        });
    }

    // Pass 3: Bold+italic
    for (start, end) in find_in_unoccupied(text, re_bold_italic(), &occupied) {
        let content = captured_content(text, re_bold_italic(), start);
        mark_occupied(&mut occupied, start, end);
        spans.push(InlineSpan {
            start,
            end,
            kind: SpanKind::BoldItalic(content),
        });
    }

    // Pass 4: Bold
    for (start, end) in find_in_unoccupied(text, re_bold(), &occupied) {
        let content = captured_content(text, re_bold(), start);
        mark_occupied(&mut occupied, start, end);
        spans.push(InlineSpan {
            start,
            end,
            kind: SpanKind::Bold(content),
        });
    }

    // Pass 5: Italic
    for (start, end) in find_in_unoccupied(text, re_italic(), &occupied) {
        let content = captured_content(text, re_italic(), start);
        mark_occupied(&mut occupied, start, end);
        spans.push(InlineSpan {
            start,
            end,
            kind: SpanKind::Italic(content),
        });
    }

    spans.sort_by_key(|s| s.start);
    spans
}
