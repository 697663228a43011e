//! Error types for the VibeTrading services
//!
//! Only startup failures reach application code. Route errors (unknown
//! path, wrong method) and client transport errors are handled inside the
//! HTTP framework and never surface here.

use thiserror::Error;

/// Service skeleton error type
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid startup configuration, fatal before binding
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The listener could not be bound
    #[error("Bind error: {0}")]
    Bind(std::io::Error),

    /// Failure while serving connections
    #[error("Server error: {0}")]
    Server(std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
