//! Configuration loading errors.

use thiserror::Error;

/// Error loading configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}
