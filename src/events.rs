//! Typed event shapes for the runner ↔ reporter boundary.
//!
//! The host process and the reporter communicate through enumerated payload
//! types and the [`RunnerHost`] seam instead of a string-keyed emitter:
//!
//! - Inbound: [`InboundEvent::RunnablesReady`], [`InboundEvent::ReporterStart`]
//! - Host query: [`RunnerHost::user_editor`] answering with [`UserEditorState`]
//! - Outbound: [`OutboundEvent::OpenFile`], [`OutboundEvent::SetUserEditor`],
//!   [`OutboundEvent::ConsoleError`]
//!
//! Delivery is synchronous: the reporter reacts to inbound events and emits
//! outbound events on the same call stack. There are no timers, no blocking
//! I/O, and no cancellation.

use serde::{Deserialize, Serialize};

use crate::config::{EditorOption, PreferredOpener};

/// A snippet of source code shown alongside an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFrame {
    /// The file path relative to the project root.
    pub relative_file: String,
    /// The resolved absolute file path.
    pub absolute_file: String,
    /// 1-based line the error points at.
    pub line: u32,
    /// 1-based column the error points at.
    pub column: u32,
    /// Language tag for syntax highlighting. `None` falls back to "text".
    #[serde(default)]
    pub language: Option<String>,
    /// The snippet text, possibly multi-line.
    pub frame: String,
}

/// Error payload attached to a failed test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestError {
    /// Error class name (e.g. "CommandError").
    pub name: String,
    /// Error message; markdown inline markup is rendered by the panel.
    pub message: String,
    /// Raw multi-line stack text. The first line is the error's own message.
    pub stack: String,
    /// Id of the command the error belongs to, when it came from one.
    #[serde(default)]
    pub command_id: Option<String>,
    /// Optional code frame; absence hides the code-frame element.
    #[serde(default)]
    pub code_frame: Option<CodeFrame>,
    /// Optional documentation link shown with the error.
    #[serde(default)]
    pub docs_url: Option<String>,
}

/// One test in the runnables tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub err: Option<TestError>,
}

/// One suite in the runnables tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub suites: Vec<Suite>,
}

/// Root payload of the `runnables:ready` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Runnables {
    #[serde(default)]
    pub suites: Vec<Suite>,
    #[serde(default)]
    pub tests: Vec<Test>,
}

/// Payload of the `reporter:start` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterStartConfig {
    /// Path of the spec file being reported on, if the host passes one.
    pub spec_path: Option<String>,
}

/// Events the reporter consumes from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InboundEvent {
    /// The runnables tree is known; payload carries suites/tests and errors.
    RunnablesReady(Runnables),
    /// The run started; the reporter builds its panel state.
    ReporterStart(ReporterStartConfig),
}

/// The host's answer to a user-editor query.
#[derive(Debug, Clone, PartialEq)]
pub enum UserEditorState {
    /// The user already confirmed an opener; open files with it directly.
    Preferred(PreferredOpener),
    /// No opener confirmed yet; the catalog of editors to offer.
    Available(Vec<EditorOption>),
}

/// A request to open a file at a location in a chosen editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenRequest {
    /// The opener to use.
    pub where_: PreferredOpener,
    /// Absolute file path to open.
    pub file: String,
    /// 1-based line to jump to.
    pub line: u32,
    /// 1-based column to jump to.
    pub column: u32,
}

/// Events the reporter emits to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutboundEvent {
    /// Open a file at a location in the given editor.
    OpenFile(OpenRequest),
    /// Persist the editor option the user confirmed.
    SetUserEditor(EditorOption),
    /// Print the active error to the host console.
    ConsoleError {
        command_id: Option<String>,
        test_id: String,
    },
}

/// Host-side seam the reporter session talks to.
///
/// Production hosts bridge this to their transport; tests use a recording
/// implementation. `emit` takes `&self` so hosts can fan events out without
/// threading mutability through the session.
pub trait RunnerHost {
    /// Answer the user-editor query: the confirmed opener, or the catalog
    /// of editors to offer.
    fn user_editor(&self) -> UserEditorState;

    /// Receive an outbound event.
    fn emit(&self, event: OutboundEvent);
}
