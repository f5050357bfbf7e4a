//! Record model for forcewire
//!
//! This crate defines the data the encoders in `forcewire-wire` work on:
//!
//! - [`SObject`]: a record type with a static field table and a by-name accessor
//! - [`FieldDescriptor`]: one declared field (wire name, kind, filter rules)
//! - [`FieldValue`]: the closed set of value kinds an accessor returns
//! - [`OperationKind`]: the CRUD action a record is sent for
//! - [`FilterFlags`]: ignore-if-null, insert-only, readonly and ignore rules

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod types;
pub mod value;

pub use record::{FieldDescriptor, SObject};
pub use types::{FieldKind, FilterFlags, OperationKind};
pub use value::FieldValue;
