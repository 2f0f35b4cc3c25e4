//! Types for the editor selection flow.

use crate::config::{EditorOption, PreferredOpener};

/// The location a click asked to open: absolute file, line, column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTarget {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Outcome of resolving an opener for a click.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenerDecision {
    /// A preferred opener exists; emit the open request directly.
    Immediate(PreferredOpener),
    /// No preferred opener; prompt the user over these options.
    PromptUser(Vec<EditorOption>),
}

/// Validation failures for the editor prompt.
///
/// The `Display` strings are the user-facing inline messages shown in the
/// prompt; both are recovered locally by re-displaying the prompt and never
/// surface as process failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Submitted without selecting any option.
    #[error("Please select a preference")]
    SelectionRequired,
    /// Submitted with "Other" selected and an empty path.
    #[error("Please enter the path to your editor")]
    PathRequired,
}
