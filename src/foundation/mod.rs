//! Ambient pieces shared by every utility: errors, configuration and JSON output.

/// Tool configuration (paths to external binaries and content directories).
pub mod config;
/// Error type and result alias.
pub mod error;
/// Pretty JSON output helpers.
pub mod json;
