//! Error types and handling for FleetPulse
//!
//! The simulator itself is infallible: every request, including one for an
//! unknown service id, produces a valid snapshot. The only errors that can
//! occur are process-level (configuration, socket binding), so the error
//! enum stays small.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for FleetPulse
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from std (socket bind, serve loop)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
