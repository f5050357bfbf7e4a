//! Wire encoding for forcewire
//!
//! This crate turns [`SObject`](forcewire_core::SObject) records into the two
//! payload shapes the CRM API consumes:
//!
//! - an XML fragment for create/update/delete envelopes ([`XmlEncoder`])
//! - a flat CSV row for bulk export ([`CsvEncoder`])
//!
//! Both walk a per-type descriptor list resolved and cached by
//! [`DescriptorRegistry`].
//!
//! ## Field Selection
//!
//! | Flags | XML insert | XML other | CSV |
//! |-------|------------|-----------|-----|
//! | none | yes | yes | yes |
//! | IgnoreIfNull | yes | yes | yes |
//! | SaveOnInsertOnly | yes | no | yes |
//! | Readonly | yes | yes | no |
//! | Ignore | no | no | no |
//!
//! ## Examples
//!
//! ```ignore
//! use forcewire_wire::{encode_csv_row, encode_xml};
//!
//! let xml = encode_xml(&account)?;
//! let row = encode_csv_row(&account)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod csv;
pub mod descriptor;
pub mod error;
pub mod text;
pub mod xml;

// Re-export main types
pub use csv::{csv_value, encode_csv_row, CsvEncoder};
pub use descriptor::{DescriptorRegistry, Descriptors, FieldFilter};
pub use error::{EncodeError, Result};
pub use text::{default_text, format_datetime, DATETIME_FORMAT};
pub use xml::{encode_xml, XmlEncoder, SOBJECT_NAMESPACE};
