//! Small shell conveniences: navigation, listing and version stamps.

/// Colourized `ls -ld` clone.
pub mod listing;
/// Keyword to directory resolution for a `cd` wrapper.
pub mod navigate;
/// Timestamp literal generation and clipboard output.
pub mod stamp;
