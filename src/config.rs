//! Reporter configuration management.
//!
//! Re-exports all configuration types from the `spec-reporter-config` crate.
//! All configuration types, defaults, and utilities are defined there.

pub use spec_reporter_config::*;
