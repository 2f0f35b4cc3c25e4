//! Stack trace parsing into structured, clickable frames.
//!
//! Converts the raw multi-line stack attached to a test error into an
//! ordered sequence of [`StackFrame`] records:
//!
//! - **Call frames**: `at <function> (<file>:<line>:<column>)` lines, with
//!   the path resolved against the project root
//! - **Annotation frames**: anything else (e.g. `From previous event:`),
//!   kept as message-only records
//! - **Verbatim indentation**: leading whitespace is captured exactly so the
//!   panel can pare it down for display without losing relative depth
//!
//! The first line of the raw stack is the error's own message and is never
//! part of the returned sequence.
//!
//! Sub-modules:
//! - [`types`] — `StackFrame`
//! - [`parse`] — line classification and path resolution (internal)

mod parse;
mod types;


// Re-export the public API.
pub use parse::{parse_stack, parse_stack_vec};
pub use types::StackFrame;
