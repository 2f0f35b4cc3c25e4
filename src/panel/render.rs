//! View construction: markdown message lines, pared-down stack lines with
//! clickable paths, and the code frame element.

use crate::config::StackDisplayConfig;
use crate::events::CodeFrame;
use crate::markdown::{SpanKind, extract_inline_spans};
use crate::stack_trace::StackFrame;

use super::types::{CodeFrameView, StyledLine, StyledSegment};

/// Render a markdown message into styled lines, one per source line.
pub(super) fn render_message(message: &str) -> Vec<StyledLine> {
    message.lines().map(render_markdown_line).collect()
}

/// Render one line of inline markdown into styled segments with the
/// markers stripped.
fn render_markdown_line(text: &str) -> StyledLine {
    let spans = extract_inline_spans(text);
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in &spans {
        if span.start > cursor {
            segments.push(StyledSegment {
                text: text[cursor..span.start].to_string(),
                ..Default::default()
            });
        }
        let segment = match &span.kind {
            SpanKind::Escaped(content) => StyledSegment {
                text: content.clone(),
                ..Default::default()
            },
            SpanKind::Code(content) => StyledSegment {
                text: content.clone(),
                code: true,
                ..Default::default()
            },
            SpanKind::BoldItalic(content) => StyledSegment {
                text: content.clone(),
                bold: true,
                italic: true,
                ..Default::default()
            },
            SpanKind::Bold(content) => StyledSegment {
                text: content.clone(),
                bold: true,
                ..Default::default()
            },
            SpanKind::Italic(content) => StyledSegment {
                text: content.clone(),
                italic: true,
                ..Default::default()
            },
        };
        segments.push(segment);
        cursor = span.end;
    }

    if cursor < text.len() {
        segments.push(StyledSegment {
            text: text[cursor..].to_string(),
            ..Default::default()
        });
    }

    StyledLine::new(segments)
}

/// Whether a frame produces a stack line. Empty annotations (e.g. a
/// trailing all-whitespace stack line) are skipped.
fn is_displayable(frame: &StackFrame) -> bool {
    frame.message.as_deref() != Some("")
}

/// Render stack frames into display lines.
///
/// Whitespace is pared down: the minimum leading indentation across
/// displayed frames is subtracted so the shallowest frame starts at column
/// zero while relative depth is preserved. Long runs of consecutive call
/// frames are collapsed per the display config.
pub(super) fn render_stack_lines(
    frames: &[StackFrame],
    display: &StackDisplayConfig,
) -> Vec<StyledLine> {
    let shown: Vec<&StackFrame> = frames.iter().filter(|f| is_displayable(f)).collect();
    let pare = shown
        .iter()
        .map(|f| f.whitespace.chars().count())
        .min()
        .unwrap_or(0);

    let mut lines = Vec::new();
    let mut i = 0;
    while i < shown.len() {
        if shown[i].is_call_site() {
            // Collect consecutive call frames for collapsing.
            let start = i;
            while i < shown.len() && shown[i].is_call_site() {
                i += 1;
            }
            render_frame_group(&shown[start..i], pare, display, &mut lines);
        } else {
            let frame = shown[i];
            let message = frame.message.as_deref().unwrap_or("");
            lines.push(StyledLine::plain(&format!(
                "{}{}",
                pared_whitespace(frame, pare),
                message
            )));
            i += 1;
        }
    }
    lines
}

/// Render a group of consecutive call frames, collapsing if too many.
fn render_frame_group(
    frames: &[&StackFrame],
    pare: usize,
    display: &StackDisplayConfig,
    lines: &mut Vec<StyledLine>,
) {
    let count = frames.len();
    if count <= display.max_visible_frames {
        for frame in frames {
            lines.push(render_frame_line(frame, pare));
        }
        return;
    }

    let head = display
        .max_visible_frames
        .saturating_sub(display.keep_tail_frames);
    for frame in frames.iter().take(head) {
        lines.push(render_frame_line(frame, pare));
    }

    let hidden = count - head - display.keep_tail_frames;
    if hidden > 0 {
        lines.push(StyledLine::new(vec![StyledSegment {
            text: format!("    ... {hidden} more frames"),
            italic: true,
            ..Default::default()
        }]));
    }

    for frame in &frames[count - display.keep_tail_frames..] {
        lines.push(render_frame_line(frame, pare));
    }
}

/// Render one call frame with its file path as a clickable segment.
fn render_frame_line(frame: &StackFrame, pare: usize) -> StyledLine {
    let whitespace = pared_whitespace(frame, pare);
    let function = frame.function.as_deref().unwrap_or("<unknown>");
    let relative = frame.relative_file.as_deref().unwrap_or("");
    let absolute = frame.absolute_file.as_deref().unwrap_or(relative);
    let line = frame.line.unwrap_or(0);
    let column = frame.column.unwrap_or(0);

    StyledLine::new(vec![
        StyledSegment {
            text: format!("{whitespace}at {function} ("),
            ..Default::default()
        },
        StyledSegment {
            text: format!("{relative}:{line}:{column}"),
            underline: true,
            link_url: Some(format!("{absolute}:{line}:{column}")),
            ..Default::default()
        },
        StyledSegment {
            text: ")".to_string(),
            ..Default::default()
        },
    ])
}

/// A frame's indentation with the common minimum stripped.
fn pared_whitespace(frame: &StackFrame, pare: usize) -> String {
    frame.whitespace.chars().skip(pare).collect()
}

/// Render the code frame element.
pub(super) fn render_code_frame(frame: &CodeFrame) -> CodeFrameView {
    CodeFrameView {
        file_path: format!("{}:{}:{}", frame.relative_file, frame.line, frame.column),
        link_url: format!("{}:{}:{}", frame.absolute_file, frame.line, frame.column),
        lines: frame.frame.lines().map(str::to_string).collect(),
        language: frame.language.clone(),
    }
}
