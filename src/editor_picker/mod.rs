//! Editor selection: open immediately with a confirmed opener, or prompt
//! the user over the editor catalog with submit validation.
//!
//! The prompt is a small state machine:
//!
//! ```text
//! Closed -> Open            (first click with no preferred opener)
//! Open -> Open-with-error   (invalid submit)
//! Open-with-error -> Open   (selection change clears the message)
//! Open -> Closed            (valid submit; events emitted by the session)
//! ```
//!
//! Sub-modules:
//! - [`types`]  — `OpenTarget`, `OpenerDecision`, `ValidationError`
//! - [`prompt`] — `EditorPrompt` and `PromptSubmission`

mod prompt;
mod types;

#[cfg(test)]
mod tests;

// Re-export the public API.
pub use prompt::{EditorPrompt, PromptSubmission};
pub use types::{OpenTarget, OpenerDecision, ValidationError};

use crate::events::UserEditorState;

/// Decide how to open a file for a click: directly via the confirmed
/// opener, or by prompting the user over the available editors.
pub fn resolve_opener(state: UserEditorState) -> OpenerDecision {
    match state {
        UserEditorState::Preferred(opener) => OpenerDecision::Immediate(opener),
        UserEditorState::Available(editors) => OpenerDecision::PromptUser(editors),
    }
}
