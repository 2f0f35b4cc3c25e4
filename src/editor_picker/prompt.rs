//! The editor selection prompt and its validation state machine.

use crate::config::{EditorOption, PreferredOpener};

use super::types::{OpenTarget, ValidationError};

/// The prompt shown when no preferred opener is configured.
///
/// Created open with no selection and no validation error. An invalid
/// submit stores the error for display; changing the selection clears it
/// immediately; a valid submit yields a [`PromptSubmission`] and the
/// session closes the prompt.
#[derive(Debug, Clone)]
pub struct EditorPrompt {
    editors: Vec<EditorOption>,
    target: OpenTarget,
    selected: Option<String>,
    other_path: String,
    error: Option<ValidationError>,
}

/// A validated prompt submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSubmission {
    /// The option the user picked, as emitted in `set:user:editor`.
    pub option: EditorOption,
    /// The opener placed into the open request and cached by the session.
    pub opener: PreferredOpener,
}

impl EditorPrompt {
    pub(crate) fn new(editors: Vec<EditorOption>, target: OpenTarget) -> Self {
        Self {
            editors,
            target,
            selected: None,
            other_path: String::new(),
            error: None,
        }
    }

    /// The options offered, in display order.
    pub fn editors(&self) -> &[EditorOption] {
        &self.editors
    }

    /// Id of the currently selected option.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The free-text path typed into the "Other" entry.
    pub fn other_path(&self) -> &str {
        &self.other_path
    }

    /// The inline validation message currently shown, if any.
    pub fn validation_error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The location the prompt will open on confirm.
    pub fn target(&self) -> &OpenTarget {
        &self.target
    }

    /// Select an option by id. Switching the selection clears a previously
    /// shown validation error. Returns false for an unknown id.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.editors.iter().any(|e| e.id == id) {
            return false;
        }
        if self.selected.as_deref() != Some(id) {
            self.error = None;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Update the free-text editor path on the "Other" entry.
    ///
    /// Typing does not clear a shown validation error; only a selection
    /// change does, and the next submit re-validates.
    pub fn set_other_path(&mut self, path: &str) {
        self.other_path = path.to_string();
    }

    /// Validate the current state. On success the stored error is cleared
    /// and the submission describes what to emit; on failure the error is
    /// kept for display until the selection changes.
    pub(crate) fn submit(&mut self) -> Result<PromptSubmission, ValidationError> {
        let result = self.validate();
        self.error = result.as_ref().err().copied();
        result
    }

    fn validate(&self) -> Result<PromptSubmission, ValidationError> {
        let Some(selected) = self.selected.as_deref() else {
            return Err(ValidationError::SelectionRequired);
        };
        let Some(option) = self.editors.iter().find(|e| e.id == selected) else {
            return Err(ValidationError::SelectionRequired);
        };
        let opener = if option.is_other {
            let path = self.other_path.trim();
            if path.is_empty() {
                return Err(ValidationError::PathRequired);
            }
            PreferredOpener::Custom {
                path: path.to_string(),
            }
        } else {
            PreferredOpener::Editor(option.clone())
        };
        Ok(PromptSubmission {
            option: option.clone(),
            opener,
        })
    }
}
