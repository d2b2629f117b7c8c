//! Error types
//!
//! The dashboard itself never surfaces errors: missing surfaces, empty chat
//! submissions and unknown section ids are all silent no-ops. Errors only
//! arise at the edges (config files, writing output, serialization).

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced by the configuration and output layers
#[derive(Error, Debug)]
pub enum MiraiError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MiraiError {
    fn from(err: serde_json::Error) -> Self {
        MiraiError::Serialization(err.to_string())
    }
}

/// Result type alias for fallible crate operations
pub type MiraiResult<T> = Result<T, MiraiError>;
