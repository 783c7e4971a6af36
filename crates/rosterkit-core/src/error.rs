//! Error types for roster loading.

use thiserror::Error;

/// Errors that can occur while loading a roster fixture.
///
/// The component layer itself has no failure path; these errors only
/// surface from the fixture loader, and callers are expected to degrade to
/// a default roster rather than abort.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Reading the fixture file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture was not valid roster JSON
    #[error("Roster parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
