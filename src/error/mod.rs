//! Error handling for the ack helper
//!
//! Every fallible operation in the crate returns [`AckError`]. Query failures
//! from a status service are the one class the poller swallows; everything
//! else reaches the CLI and is reported once.

use std::fmt;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, AckError>;

/// Message reported when the poller runs out of attempts
pub const ACK_TIMEOUT_MESSAGE: &str = "timeout: no acknowledgement found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckError {
    /// A hex-encoded input could not be decoded
    InvalidEncoding(String),
    /// The status service could not answer (absorbed by the poller)
    TransientQuery(String),
    /// No terminal status within the attempt budget
    AckTimeout,
    /// Configuration errors
    Config(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for AckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AckError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {msg}"),
            AckError::TransientQuery(msg) => write!(f, "Status query failed: {msg}"),
            AckError::AckTimeout => write!(f, "{ACK_TIMEOUT_MESSAGE}"),
            AckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AckError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            AckError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for AckError {}

impl From<std::io::Error> for AckError {
    fn from(err: std::io::Error) -> Self {
        AckError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AckError {
    fn from(err: serde_json::Error) -> Self {
        AckError::Serialization(err.to_string())
    }
}

impl From<hex::FromHexError> for AckError {
    fn from(err: hex::FromHexError) -> Self {
        AckError::InvalidEncoding(err.to_string())
    }
}

impl From<toml::de::Error> for AckError {
    fn from(err: toml::de::Error) -> Self {
        AckError::Config(err.to_string())
    }
}
