//! Convenient imports for forcewire.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use forcewire::prelude::*;
//!
//! let xml = Encoder::new().to_xml(&account)?;
//! ```

// Main entry point
pub use crate::encoder::{Encoder, EncoderBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Record model
pub use forcewire_core::{FieldDescriptor, FieldKind, FieldValue, FilterFlags, OperationKind, SObject};

// Descriptor resolution
pub use forcewire_wire::{DescriptorRegistry, FieldFilter};
