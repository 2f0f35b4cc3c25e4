//! Stack line classification and file path resolution.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::types::StackFrame;

/// Call frame pattern: optional indentation, then
/// `at <function> (<file>:<line>:<column>)`.
fn re_call_frame() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s*)at\s+(\S+)\s+\((.+?):(\d+):(\d+)\)\s*$")
            .expect("re_call_frame: pattern is valid and should always compile")
    })
}

/// Parse a raw error stack into structured frames.
///
/// The first line is the error's own message and is never part of the
/// returned sequence. Every remaining line becomes exactly one frame, in
/// order; classification is driven solely by the call-frame pattern.
///
/// The returned iterator is a pure function of its input: it is finite,
/// order-preserving, and re-parsing the same stack yields identical frames.
pub fn parse_stack<'a>(
    raw_stack: &'a str,
    project_root: &'a Path,
) -> impl Iterator<Item = StackFrame> + 'a {
    raw_stack
        .lines()
        .skip(1)
        .map(move |line| parse_frame_line(line, project_root))
}

/// Collecting convenience over [`parse_stack`].
pub fn parse_stack_vec(raw_stack: &str, project_root: &Path) -> Vec<StackFrame> {
    parse_stack(raw_stack, project_root).collect()
}

/// Classify a single stack line into a call frame or an annotation frame.
fn parse_frame_line(line: &str, project_root: &Path) -> StackFrame {
    if let Some(caps) = re_call_frame().captures(line)
        && let Ok(line_no) = caps[4].parse::<u32>()
        && let Ok(column) = caps[5].parse::<u32>()
    {
        let (relative_file, absolute_file) = resolve_paths(&caps[3], project_root);
        return StackFrame {
            message: None,
            relative_file: Some(relative_file),
            absolute_file: Some(absolute_file),
            function: Some(caps[2].to_string()),
            line: Some(line_no),
            column: Some(column),
            whitespace: caps[1].to_string(),
        };
    }

    // Annotation line: trailing whitespace dropped, leading whitespace
    // captured separately from the message text.
    let whitespace: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let message = line
        .trim_end()
        .get(whitespace.len()..)
        .unwrap_or("")
        .to_string();
    StackFrame {
        message: Some(message),
        relative_file: None,
        absolute_file: None,
        function: None,
        line: None,
        column: None,
        whitespace,
    }
}

/// Split a frame's file into its relative and absolute forms.
///
/// Relative paths resolve against the project root. Paths that arrive
/// absolute are kept, and the relative form is the root-stripped path when
/// the file lives under the root.
fn resolve_paths(file: &str, project_root: &Path) -> (String, String) {
    let path = Path::new(file);
    if path.is_absolute() {
        let relative = path
            .strip_prefix(project_root)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| file.to_string());
        (relative, file.to_string())
    } else {
        let absolute = project_root.join(path).to_string_lossy().into_owned();
        (file.to_string(), absolute)
    }
}
