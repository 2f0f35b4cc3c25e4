//! spec-reporter — the error reporting core of a test runner.
//!
//! Consumes runner events describing a failed test, parses the error's raw
//! stack into structured clickable frames, renders the error (markdown
//! message, collapsible stack trace, optional code frame) into a styled view
//! model, and drives the "jump to editor" flow: open immediately in a
//! previously confirmed editor, or prompt the user to pick one, with
//! validation.
//!
//! The crate is deliberately front-end agnostic: the [`panel::PanelView`]
//! view model is the rendering surface, and the [`events::RunnerHost`] trait
//! is the seam to the host process. Everything is synchronous and
//! single-threaded; the reporter reacts to one event at a time.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod editor_picker;
pub mod events;
pub mod markdown;
pub mod opener;
pub mod panel;
pub mod stack_trace;
