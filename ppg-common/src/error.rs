//! Common error types for PPG

use thiserror::Error;

/// Common result type for PPG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across PPG services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Audio payload could not be decoded
    #[error("Audio decode error: {0}")]
    AudioDecode(String),

    /// Signal has no variance (silent or constant input); feature
    /// normalization is undefined for it
    #[error("Degenerate audio: {0}")]
    DegenerateAudio(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
