//! Configuration system for the spec-reporter error reporting core.
//!
//! This crate provides configuration loading, saving, and default values
//! for the reporter. It includes:
//!
//! - The project root used to resolve relative stack frame paths
//! - The catalog of editors offered when the user has no preferred opener
//! - The persisted preferred opener, once the user has confirmed one
//! - Stack trace display options (frame collapsing)

pub mod config;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::ReporterConfig;
pub use error::ConfigError;
pub use types::{EditorOption, PreferredOpener, StackDisplayConfig, default_available_editors};
