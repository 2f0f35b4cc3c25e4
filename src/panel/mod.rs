//! The error panel: session state and the styled view model.
//!
//! [`ReporterSession`] owns the inbound runner state (runnables, the active
//! error, the cached preferred opener, and the editor prompt) and produces a
//! [`PanelView`] — the front-end agnostic rendering surface:
//!
//! - **Error name and markdown message**: inline markup rendered to styled
//!   segments with markers stripped
//! - **Collapsible stack trace**: hidden by default, whitespace pared down so
//!   the shallowest frame starts at column zero, file paths clickable
//! - **Code frame**: optional, with a `language-<tag>` class falling back to
//!   `language-text`
//! - **Print to console**: re-emits the error to the host console
//!
//! Sub-modules:
//! - [`types`]   — `PanelView`, `CodeFrameView`, `StyledLine`, `StyledSegment`
//! - [`render`]  — view construction from parsed state (internal)
//! - [`session`] — `ReporterSession` and click/prompt handling

mod render;
mod session;
mod types;


// Re-export the public API.
pub use session::{ClickOutcome, ReporterSession};
pub use types::{CodeFrameView, PanelView, StyledLine, StyledSegment};
