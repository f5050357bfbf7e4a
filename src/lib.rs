//! # Forcewire
//!
//! Field selection and wire encoding for CRM records.
//!
//! Forcewire turns typed records into the two payloads a SOAP-based CRM API
//! consumes: an XML fragment for create/update/delete calls and a flat CSV
//! row for bulk export. For every field it decides whether to send the
//! value, ask the server to clear it, or leave it out, based on the field's
//! declared rules and the record's operation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use forcewire::prelude::*;
//!
//! let encoder = Encoder::new();
//!
//! // Create/update/delete envelope body
//! let xml = encoder.to_xml(&account)?;
//!
//! // Bulk export
//! let csv = encoder.to_csv_rows(&accounts)?;
//! ```
//!
//! ## Field Rules
//!
//! - [`FilterFlags::IGNORE_IF_NULL`] - leave the field out when it has no value
//! - [`FilterFlags::SAVE_ON_INSERT_ONLY`] - only send the field on insert
//! - [`FilterFlags::READONLY`] - never exported to CSV
//! - [`FilterFlags::IGNORE`] - never sent
//!
//! Absent fields without `IGNORE_IF_NULL` are listed in `fieldsToNull`
//! elements, except on insert where nothing exists to clear.

#![warn(missing_docs)]

mod encoder;
mod error;

pub mod prelude;

// Re-export main entry points
pub use encoder::{Encoder, EncoderBuilder};
pub use error::{Error, Result};

// Re-export the record model
pub use forcewire_core::{FieldDescriptor, FieldKind, FieldValue, FilterFlags, OperationKind, SObject};

// Re-export the engine for direct use
pub use forcewire_wire::{
    CsvEncoder, DescriptorRegistry, Descriptors, FieldFilter, XmlEncoder, SOBJECT_NAMESPACE,
};
