//! Encoding errors
//!
//! The engine is pure computation, so the only real failure is bad field
//! metadata, which is a configuration defect and is never retried. The
//! remaining variants come from the output sink.

use thiserror::Error;

/// Error raised while resolving descriptors or writing output
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The record type's declared metadata cannot be used
    #[error("unresolvable field metadata for type `{type_name}`: {reason}")]
    Metadata {
        /// Offending record type
        type_name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer failure
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Encoded bytes were not UTF-8
    #[error("encoded output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl EncodeError {
    /// Create a metadata error for a record type
    pub fn metadata(type_name: &'static str, reason: impl Into<String>) -> Self {
        EncodeError::Metadata {
            type_name,
            reason: reason.into(),
        }
    }

    /// True for configuration defects in the record's declared metadata
    pub fn is_metadata(&self) -> bool {
        matches!(self, EncodeError::Metadata { .. })
    }
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;
