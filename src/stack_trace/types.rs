//! Frame records produced by stack parsing.

/// One parsed line of an error's stack: either a call site or an
/// annotation message.
///
/// Exactly one of the two forms is populated: annotation frames carry
/// `message`; call frames carry `relative_file`, `line`, and `column`
/// (plus `absolute_file` and usually `function`). `whitespace` is set on
/// both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Annotation text for message-only lines (e.g. "From previous event:").
    pub message: Option<String>,
    /// The file path as it appeared in the frame.
    pub relative_file: Option<String>,
    /// The path resolved against the project root.
    pub absolute_file: Option<String>,
    /// The function named at the call site.
    pub function: Option<String>,
    /// 1-based line number.
    pub line: Option<u32>,
    /// 1-based column number.
    pub column: Option<u32>,
    /// Leading indentation captured verbatim for faithful re-rendering.
    pub whitespace: String,
}

impl StackFrame {
    /// Whether this frame is a call site with an openable location.
    pub fn is_call_site(&self) -> bool {
        self.relative_file.is_some()
    }

    /// The openable location of a call frame: absolute path, line, column.
    pub fn location(&self) -> Option<(&str, u32, u32)> {
        match (self.absolute_file.as_deref(), self.line, self.column) {
            (Some(file), Some(line), Some(column)) => Some((file, line, column)),
            _ => None,
        }
    }
}
