//! Shared configuration types: editor catalog entries, the persisted
//! preferred opener, and stack display options.

use serde::{Deserialize, Serialize};

/// One entry in the catalog of editors offered to the user.
///
/// The catalog contains a fixed set of known editors plus exactly one
/// "Other" entry (`is_other = true`) whose opener is a free-text path
/// supplied by the user at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOption {
    /// Unique key identifying this option (e.g. "vscode").
    pub id: String,
    /// Display label shown in the selection prompt (e.g. "Visual Studio Code").
    pub name: String,
    /// Whether this is the free-text "Other" entry.
    #[serde(default)]
    pub is_other: bool,
    /// Identifier of the opener backing this option. Empty when `is_other`.
    #[serde(default)]
    pub opener_id: String,
}

impl EditorOption {
    /// Create a catalog entry backed by a named opener.
    pub fn new(id: &str, name: &str, opener_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_other: false,
            opener_id: opener_id.to_string(),
        }
    }

    /// Create the free-text "Other" entry.
    pub fn other(name: &str) -> Self {
        Self {
            id: "other".to_string(),
            name: name.to_string(),
            is_other: true,
            opener_id: String::new(),
        }
    }
}

/// The editor identity used for "open file" requests once confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreferredOpener {
    /// A catalog editor the user confirmed.
    Editor(EditorOption),
    /// A custom editor given by an executable path (the "Other" choice).
    Custom {
        /// Path to the editor executable.
        path: String,
    },
}

/// Display options for the rendered stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDisplayConfig {
    /// Maximum frames to show before collapsing.
    pub max_visible_frames: usize,
    /// Always keep the last N frames visible when collapsing.
    pub keep_tail_frames: usize,
}

impl Default for StackDisplayConfig {
    fn default() -> Self {
        Self {
            max_visible_frames: 5,
            keep_tail_frames: 1,
        }
    }
}

/// The default editor catalog offered when no preferred opener is set.
pub fn default_available_editors() -> Vec<EditorOption> {
    vec![
        EditorOption::new("computer", "On Computer", "computer"),
        EditorOption::new("atom", "Atom", "atom"),
        EditorOption::new("vim", "Vim", "vim"),
        EditorOption::new("sublime", "Sublime Text", "sublime"),
        EditorOption::new("vscode", "Visual Studio Code", "vscode"),
        EditorOption::other("Other"),
    ]
}
