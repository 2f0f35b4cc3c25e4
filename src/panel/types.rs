//! Styled view-model types for the rendered error panel.

/// A segment of styled text within a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Whether this segment is bold.
    pub bold: bool,
    /// Whether this segment is italic.
    pub italic: bool,
    /// Whether this segment is underlined.
    pub underline: bool,
    /// Whether this segment is an inline code span.
    pub code: bool,
    /// Link target for clickable segments (`<file>:<line>:<column>`).
    pub link_url: Option<String>,
}

/// A single line of styled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment {
                text: text.to_string(),
                ..Default::default()
            }],
        }
    }

    /// The unstyled text of this line.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// The rendered code frame element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFrameView {
    /// File path shown in the frame header, `<relative>:<line>:<column>`.
    pub file_path: String,
    /// Link target of the header path (absolute location).
    pub link_url: String,
    /// The snippet lines.
    pub lines: Vec<String>,
    /// Language tag, when the error carried one.
    pub language: Option<String>,
}

impl CodeFrameView {
    /// The highlighting class for the snippet, falling back to "text" when
    /// the language is unset.
    pub fn language_class(&self) -> String {
        format!("language-{}", self.language.as_deref().unwrap_or("text"))
    }
}

/// The rendered error panel.
///
/// This is the testing and rendering surface: hosts draw it, tests assert
/// against it. It carries no behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// Error class name, shown verbatim.
    pub error_name: String,
    /// Markdown-rendered message lines.
    pub message: Vec<StyledLine>,
    /// Documentation link shown with the error, when present.
    pub docs_url: Option<String>,
    /// Whether the stack trace element is expanded.
    pub stack_visible: bool,
    /// Stack trace lines, whitespace pared down, file paths clickable.
    /// Present (for counting links etc.) even while the stack is hidden.
    pub stack_lines: Vec<StyledLine>,
    /// The code frame element; `None` hides it.
    pub code_frame: Option<CodeFrameView>,
}
