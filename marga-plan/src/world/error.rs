//! World snapshot loading errors.

use thiserror::Error;

/// Error loading or saving a world snapshot.
#[derive(Error, Debug)]
pub enum WorldLoadError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(String),

    /// YAML was malformed or had the wrong shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Snapshot parsed but describes an impossible world
    #[error("Invalid world: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for WorldLoadError {
    fn from(e: std::io::Error) -> Self {
        WorldLoadError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for WorldLoadError {
    fn from(e: serde_yaml::Error) -> Self {
        WorldLoadError::Parse(e.to_string())
    }
}
