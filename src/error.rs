//! Unified error types for forcewire.
//!
//! This module provides a clean error type that wraps the engine's errors
//! and presents a consistent interface to users.

use forcewire_wire::EncodeError;
use thiserror::Error;

/// All forcewire errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A record type's declared field metadata is unusable
    #[error("metadata error in `{type_name}`: {reason}")]
    Metadata {
        /// Offending record type
        type_name: &'static str,
        /// What is wrong with its declarations
        reason: String,
    },

    /// I/O error while writing encoded output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoded output could not be produced
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Result type for forcewire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a configuration defect in a record type.
    ///
    /// These are never fixed by retrying.
    pub fn is_metadata(&self) -> bool {
        matches!(self, Error::Metadata { .. })
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::Metadata { type_name, reason } => Error::Metadata { type_name, reason },
            EncodeError::Io(io_err) => Error::Io(io_err),
            EncodeError::Xml(xml_err) => Error::Encoding(xml_err.to_string()),
            EncodeError::Utf8(utf8_err) => Error::Encoding(utf8_err.to_string()),
        }
    }
}
