//! Core types for record encoding
//!
//! This module defines the small closed vocabularies the encoders branch on:
//! - [`OperationKind`]: the CRUD action a record is being sent for
//! - [`FilterFlags`]: declarative per-field visibility rules
//! - [`FieldKind`]: the declared semantic type of a field

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The CRUD action a record is being encoded for
///
/// Assigned by the caller before encoding. Only [`OperationKind::Insert`]
/// changes encoder behavior: it widens the set of visible fields to include
/// insert-only fields and suppresses `fieldsToNull` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Create a new record
    Insert,
    /// Modify an existing record
    Update,
    /// Insert or update keyed by an external id
    Upsert,
    /// Remove an existing record
    Delete,
}

impl OperationKind {
    /// All operation kinds (for iteration)
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Insert,
        OperationKind::Update,
        OperationKind::Upsert,
        OperationKind::Delete,
    ];

    /// True only for [`OperationKind::Insert`]
    pub fn is_insert(&self) -> bool {
        matches!(self, OperationKind::Insert)
    }

    /// Get the operation name
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::Update => "update",
            OperationKind::Upsert => "upsert",
            OperationKind::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of declarative filter rules attached to a field
///
/// Flags are fixed when the field is declared and never change afterwards.
///
/// `IGNORE_IF_NULL`, `SAVE_ON_INSERT_ONLY` and `IGNORE` are *filter options*:
/// they take part in XML field selection. `READONLY` is a separate marker
/// consulted only by CSV export.
///
/// # Examples
///
/// ```
/// use forcewire_core::FilterFlags;
///
/// const CREATED_BY: FilterFlags =
///     FilterFlags::IGNORE_IF_NULL.union(FilterFlags::SAVE_ON_INSERT_ONLY);
///
/// assert!(CREATED_BY.contains(FilterFlags::IGNORE_IF_NULL));
/// assert!(!CREATED_BY.contains(FilterFlags::READONLY));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterFlags(u8);

impl FilterFlags {
    /// No rules declared
    pub const NONE: FilterFlags = FilterFlags(0);
    /// Skip the field entirely when it has no value
    pub const IGNORE_IF_NULL: FilterFlags = FilterFlags(1 << 0);
    /// Only send the field when the record is being inserted
    pub const SAVE_ON_INSERT_ONLY: FilterFlags = FilterFlags(1 << 1);
    /// Server-computed field, never exported
    pub const READONLY: FilterFlags = FilterFlags(1 << 2);
    /// Bookkeeping field, never sent
    pub const IGNORE: FilterFlags = FilterFlags(1 << 3);

    /// The flags that participate in XML field selection
    pub const FILTER_OPTIONS: FilterFlags = FilterFlags(
        Self::IGNORE_IF_NULL.0 | Self::SAVE_ON_INSERT_ONLY.0 | Self::IGNORE.0,
    );

    const ALL_BITS: u8 = Self::FILTER_OPTIONS.0 | Self::READONLY.0;

    /// Create from raw bits, dropping unknown bits
    pub const fn from_bits_truncate(bits: u8) -> Self {
        FilterFlags(bits & Self::ALL_BITS)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Combine two flag sets
    pub const fn union(self, other: FilterFlags) -> Self {
        FilterFlags(self.0 | other.0)
    }

    /// Flags present in both sets
    pub const fn intersection(self, other: FilterFlags) -> Self {
        FilterFlags(self.0 & other.0)
    }

    /// Flags in `self` that are not in `other`
    pub const fn difference(self, other: FilterFlags) -> Self {
        FilterFlags(self.0 & !other.0)
    }

    /// True if every flag in `other` is set
    pub const fn contains(self, other: FilterFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag in `other` is set
    pub const fn intersects(self, other: FilterFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no flags are set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FilterFlags {
    type Output = FilterFlags;

    fn bitor(self, rhs: FilterFlags) -> FilterFlags {
        self.union(rhs)
    }
}

impl BitOrAssign for FilterFlags {
    fn bitor_assign(&mut self, rhs: FilterFlags) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for FilterFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(FilterFlags, &str); 4] = [
            (FilterFlags::IGNORE_IF_NULL, "IGNORE_IF_NULL"),
            (FilterFlags::SAVE_ON_INSERT_ONLY, "SAVE_ON_INSERT_ONLY"),
            (FilterFlags::READONLY, "READONLY"),
            (FilterFlags::IGNORE, "IGNORE"),
        ];

        if self.is_empty() {
            return f.write_str("FilterFlags(NONE)");
        }
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "FilterFlags({})", set.join(" | "))
    }
}

/// Declared semantic type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// UTF-8 text
    Text,
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// Point in time, sent as UTC
    DateTime,
    /// Raw bytes, sent as base64
    Bytes,
}

impl FieldKind {
    /// Returns the kind name as a string (for log and error messages)
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Bool => "Bool",
            FieldKind::Int => "Int",
            FieldKind::Float => "Float",
            FieldKind::DateTime => "DateTime",
            FieldKind::Bytes => "Bytes",
        }
    }
}
