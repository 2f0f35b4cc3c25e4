//! Shared integration test helpers for spec-reporter.
//!
//! This module provides canonical factory functions and a recording host
//! used across the `tests/` integration test suite.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{RecordingHost, command_err, session_without_opener};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#![allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;

use spec_reporter::config::{PreferredOpener, ReporterConfig, default_available_editors};
use spec_reporter::events::{
    InboundEvent, OpenRequest, OutboundEvent, Runnables, RunnerHost, TestError, UserEditorState,
};
use spec_reporter::panel::ReporterSession;

/// The raw stack attached to the canonical command error: two frame depths
/// and one annotation line.
pub const RAW_STACK: &str = "Some Error\n  at foo.bar (my/app.js:2:7)\n    at baz.qux (e2e/specs/foo_spec.js:5:2)\n  From previous event:\n    at bar.baz (my/app.js:8:11)";

/// Host double that answers the user-editor query with a fixed state and
/// records every emitted event.
pub struct RecordingHost {
    state: UserEditorState,
    events: RefCell<Vec<OutboundEvent>>,
}

impl RecordingHost {
    pub fn new(state: UserEditorState) -> Self {
        Self {
            state,
            events: RefCell::new(Vec::new()),
        }
    }

    /// All events emitted so far, in order.
    pub fn events(&self) -> Vec<OutboundEvent> {
        self.events.borrow().clone()
    }

    /// The emitted `open:file` requests, in order.
    pub fn open_file_events(&self) -> Vec<OpenRequest> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                OutboundEvent::OpenFile(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether any `set:user:editor` event was emitted.
    pub fn has_set_user_editor(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|e| matches!(e, OutboundEvent::SetUserEditor(_)))
    }
}

impl RunnerHost for RecordingHost {
    fn user_editor(&self) -> UserEditorState {
        self.state.clone()
    }

    fn emit(&self, event: OutboundEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// The canonical command error, built the way the host would send it:
/// through the serialized payload shape.
pub fn command_err() -> TestError {
    serde_json::from_value(serde_json::json!({
        "name": "CommandError",
        "message": r"`foo` \`bar\` **baz** *fizz* ** buzz **",
        "stack": RAW_STACK,
        "docs_url": "https://docs.example.io/errors/check",
        "code_frame": {
            "relative_file": "my/app.js",
            "absolute_file": "/me/dev/my/app.js",
            "line": 2,
            "column": 7,
            "language": "javascript",
            "frame": "checkbox.check()\nform.submit()\nawait done()",
        },
    }))
    .expect("command error fixture deserializes")
}

/// A runnables tree with one suite holding a passing test and one failed
/// test (id "r3").
pub fn runnables_with(err: TestError) -> Runnables {
    serde_json::from_value(serde_json::json!({
        "suites": [{
            "id": "s1",
            "title": "suite 1",
            "tests": [
                { "id": "r1", "title": "passing test" },
                {
                    "id": "r3",
                    "title": "failing test",
                    "err": serde_json::to_value(&err).unwrap(),
                },
            ],
        }],
    }))
    .expect("runnables fixture deserializes")
}

/// Drive a fresh session through `runnables:ready` and `reporter:start`
/// with the given error and host state.
pub fn session_with(err: TestError, state: UserEditorState) -> ReporterSession<RecordingHost> {
    let host = RecordingHost::new(state);
    let config = ReporterConfig::new().with_project_root("/me/dev");
    let mut session = ReporterSession::new(host, config);
    session.handle(InboundEvent::RunnablesReady(runnables_with(err)));
    session.handle(InboundEvent::ReporterStart(Default::default()));
    session
}

/// Session whose host has no preferred opener: clicks prompt over the
/// default catalog.
pub fn session_without_opener(err: TestError) -> ReporterSession<RecordingHost> {
    session_with(err, UserEditorState::Available(default_available_editors()))
}

/// Session whose host already has a preferred opener.
pub fn session_with_opener(
    err: TestError,
    opener: PreferredOpener,
) -> ReporterSession<RecordingHost> {
    session_with(err, UserEditorState::Preferred(opener))
}
